//! Lyrics rendering: block structure, chord alignment and markup.
//!
//! [`render`] walks the song's lines once and produces a [`RenderedLyrics`]
//! tree of blocks and lines; [`RenderedLyrics::to_html`] serializes it.
//! [`render_preformatted`] is the simpler monospaced layout kept for plain
//! `<pre>` output.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::align::{align_line, AlignedSegment};
use super::block::{header_type, tabulatura_succeeding_lines, LyricLine};
use super::glossary::{build_glossary, glossary_html, parse_variations, GlossaryEntry};
use crate::chords::{chord_part_start, extract_chords, is_chord_line};
use crate::constants::render::{BLANK_LINES_CLOSING_BLOCK, DEFAULT_LYRICS_RATIO_PERCENT, PRE_CHORUS_INDENT};
use crate::html::escape;
use crate::types::{BlockType, DiagramStyle};

/// Rendering switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Chord line length, in percent of the lyric line, above which column
    /// alignment gives way to one leading annotation.
    pub lyrics_ratio_percent: usize,
    /// Leave tablature runs out.
    pub skip_tabulatures: bool,
    /// Drop chords entirely and render lyrics only.
    pub skip_lyric_chords: bool,
    /// Glossary lists only the song's declared chord variations.
    pub custom_chords_only: bool,
    /// Drawing style of glossary diagrams.
    pub diagram_style: DiagramStyle,
    /// Fill colour of diagram dots and barres.
    pub diagram_color: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lyrics_ratio_percent: DEFAULT_LYRICS_RATIO_PERCENT,
            skip_tabulatures: false,
            skip_lyric_chords: false,
            custom_chords_only: false,
            diagram_style: DiagramStyle::default(),
            diagram_color: None,
        }
    }
}

/// Per-render state: how many blocks of each type were opened so far.
#[derive(Debug, Default)]
pub struct RenderContext {
    counters: HashMap<BlockType, usize>,
}

impl RenderContext {
    /// Count a new block of `block_type` and return its 1-based number.
    pub fn open(&mut self, block_type: BlockType) -> usize {
        let counter = self.counters.entry(block_type).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Blocks of `block_type` opened so far.
    pub fn count(&self, block_type: BlockType) -> usize {
        self.counters.get(&block_type).copied().unwrap_or(0)
    }

    /// Header label of the block just opened: the verse number, `refren`
    /// for a chorus, nothing for other types.
    pub fn label(&self, block_type: BlockType) -> Option<String> {
        match block_type {
            BlockType::Zwrotka => Some(self.count(block_type).to_string()),
            BlockType::Refren => Some("refren".to_string()),
            _ => None,
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    /// Text without chords.
    Plain(String),
    /// Chords with no lyric line under them.
    ChordOnly(String),
    /// Lyrics with chords anchored inline.
    Annotated(Vec<AlignedSegment>),
    /// Text followed by a chord run on the same line.
    Mixed {
        /// Lyric part.
        text: String,
        /// Trailing chords.
        chords: String,
    },
    /// Empty line.
    Break,
}

/// A structural block of the song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block type.
    pub block_type: BlockType,
    /// Header shown once in the block (verse number, `refren`).
    pub label: Option<String>,
    /// Block contents.
    pub nodes: Vec<Node>,
}

impl Block {
    fn new(block_type: BlockType, label: Option<String>) -> Self {
        Self { block_type, label, nodes: Vec::new() }
    }

    fn tablature(lines: &[String]) -> Self {
        Self {
            block_type: BlockType::Tabulatura,
            label: None,
            nodes: lines.iter().map(|l| Node::Line(RenderedLine::Plain(l.clone()))).collect(),
        }
    }

    /// Lines directly inside the block.
    pub fn lines(&self) -> impl Iterator<Item = &RenderedLine> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Line(line) => Some(line),
            Node::Block(_) => None,
        })
    }
}

/// Element of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A line.
    Line(RenderedLine),
    /// A nested block.
    Block(Block),
}

/// Result of rendering a song's lyrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLyrics {
    /// Top-level blocks and loose lines.
    pub nodes: Vec<Node>,
    /// Distinct chords found on chord lines, in order of appearance.
    pub chords: Vec<String>,
    /// Diagrams for the chords and declared variations.
    pub glossary: Vec<GlossaryEntry>,
}

impl RenderedLyrics {
    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Block(block) => Some(block),
            Node::Line(_) => None,
        })
    }

    /// Serialize the lyrics as block, line and segment markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            write_node(&mut html, node);
        }
        html
    }

    /// Glossary diagrams as HTML.
    pub fn glossary_html(&self, style: DiagramStyle, color: Option<&str>) -> String {
        glossary_html(&self.glossary, style, color)
    }
}

/// Reusable renderer; holds only options, so one value can serve many
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct LyricsRenderer {
    options: RenderOptions,
}

impl LyricsRenderer {
    /// Renderer with the given options.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// See [`render`].
    pub fn render<S: AsRef<str>>(&self, lines: &[S], chords_variations: &str) -> RenderedLyrics {
        render(lines, chords_variations, &self.options)
    }

    /// See [`render_preformatted`].
    pub fn render_preformatted<S: AsRef<str>>(&self, lines: &[S]) -> String {
        render_preformatted(lines, &self.options)
    }
}

/// Render song lines into blocks.
///
/// A header line (`zwrotka`, `ref.`, ...) closes the open block; the new
/// block opens at the next content line. Two blank lines in a row close the
/// open block too, a single one is kept as a break. A chord line followed by
/// a lyric line is merged into one annotated line.
pub fn render<S: AsRef<str>>(lines: &[S], chords_variations: &str, options: &RenderOptions) -> RenderedLyrics {
    let tagged = LyricLine::classify_all(lines);
    let mut walker = Walker::new(options);
    let mut i = 0;

    while i < tagged.len() {
        i += walker.step(lines, &tagged, i);
    }
    walker.close_block();

    let variations = parse_variations(chords_variations);
    let glossary = build_glossary(&walker.chords, &variations, options.custom_chords_only);

    RenderedLyrics {
        nodes: walker.nodes,
        chords: walker.chords,
        glossary,
    }
}

/// Single pass over the lines; `step` returns how many lines it consumed.
struct Walker<'a> {
    options: &'a RenderOptions,
    context: RenderContext,
    nodes: Vec<Node>,
    chords: Vec<String>,
    current: Option<Block>,
    pending: Option<BlockType>,
    blank_run: usize,
}

impl<'a> Walker<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            context: RenderContext::default(),
            nodes: Vec::new(),
            chords: Vec::new(),
            current: None,
            pending: None,
            blank_run: 0,
        }
    }

    fn step<S: AsRef<str>>(&mut self, lines: &[S], tagged: &[LyricLine], i: usize) -> usize {
        let line = tagged[i].text.as_str();

        if line.trim().is_empty() {
            self.blank_run += 1;
            if self.blank_run >= BLANK_LINES_CLOSING_BLOCK {
                self.close_block();
                self.pending = None;
            }
            self.push(Node::Line(RenderedLine::Break));
            return 1;
        }
        self.blank_run = 0;

        let block_type = tagged[i].block_type;
        if block_type.is_section() && block_type != BlockType::Tabulatura {
            self.close_block();
            self.context.open(block_type);
            self.pending = Some(block_type);
            return 1;
        }

        if let Some(block_type) = self.pending.take() {
            let label = self.context.label(block_type);
            self.current = Some(Block::new(block_type, label));
        }

        if block_type == BlockType::Tabulatura {
            let run = tabulatura_succeeding_lines(lines, i);
            if !self.options.skip_tabulatures {
                let tab: Vec<String> = lines[i..i + run].iter().map(|l| l.as_ref().to_string()).collect();
                self.push(Node::Block(Block::tablature(&tab)));
            }
            return run;
        }

        if tagged[i].chord_only {
            self.collect_chords(line);
            if let Some(lyric) = tagged.get(i + 1).filter(|next| is_lyric_line(next)).map(|next| next.text.as_str()) {
                let rendered = if self.options.skip_lyric_chords {
                    RenderedLine::Plain(lyric.to_string())
                } else {
                    RenderedLine::Annotated(align_line(line, lyric, self.options.lyrics_ratio_percent))
                };
                self.push(Node::Line(rendered));
                return 2;
            }
            if !self.options.skip_lyric_chords {
                self.push(Node::Line(RenderedLine::ChordOnly(line.to_string())));
            }
            return 1;
        }

        let rendered = match chord_part_start(line) {
            Some(split) if split > 0 => {
                self.collect_chords(&line[split..]);
                let (text, chords) = line.split_at(split);
                if self.options.skip_lyric_chords {
                    RenderedLine::Plain(text.trim_end().to_string())
                } else {
                    RenderedLine::Mixed {
                        text: text.to_string(),
                        chords: chords.to_string(),
                    }
                }
            }
            _ => RenderedLine::Plain(line.to_string()),
        };
        self.push(Node::Line(rendered));
        1
    }

    fn push(&mut self, node: Node) {
        match self.current.as_mut() {
            Some(block) => block.nodes.push(node),
            None => self.nodes.push(node),
        }
    }

    /// Close the open block, moving its trailing breaks after it.
    fn close_block(&mut self) {
        let Some(mut block) = self.current.take() else {
            return;
        };

        let mut trailing = 0;
        while matches!(block.nodes.last(), Some(Node::Line(RenderedLine::Break))) {
            block.nodes.pop();
            trailing += 1;
        }
        self.nodes.push(Node::Block(block));
        self.nodes
            .extend(std::iter::repeat_with(|| Node::Line(RenderedLine::Break)).take(trailing));
    }

    fn collect_chords(&mut self, text: &str) {
        for chord in extract_chords(text) {
            if !self.chords.contains(&chord) {
                self.chords.push(chord);
            }
        }
    }
}

/// Whether a line can sit under a chord line as its lyric.
fn is_lyric_line(line: &LyricLine) -> bool {
    !line.text.trim().is_empty() && !line.chord_only && !line.is_header() && line.block_type != BlockType::Tabulatura
}

fn write_node(html: &mut String, node: &Node) {
    match node {
        Node::Line(line) => write_line(html, line, None),
        Node::Block(block) => write_block(html, block),
    }
}

fn write_block(html: &mut String, block: &Block) {
    let _ = write!(html, "<div class=\"{}\">", block.block_type.css_class());

    if block.block_type == BlockType::Tabulatura {
        let text: Vec<&str> = block
            .lines()
            .filter_map(|l| match l {
                RenderedLine::Plain(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let _ = write!(html, "<pre>{}</pre></div>", escape(&text.join("\n")));
        return;
    }

    // the label goes with the first annotated line, or the first text line
    // when the block has no chords above its lyrics
    let header_at = block
        .nodes
        .iter()
        .position(|n| matches!(n, Node::Line(RenderedLine::Annotated(_))))
        .or_else(|| {
            block
                .nodes
                .iter()
                .position(|n| matches!(n, Node::Line(RenderedLine::Plain(_) | RenderedLine::Mixed { .. })))
        });

    for (idx, node) in block.nodes.iter().enumerate() {
        match node {
            Node::Line(line) => {
                let label = if Some(idx) == header_at { block.label.as_deref() } else { None };
                write_line(html, line, label);
            }
            Node::Block(inner) => write_block(html, inner),
        }
    }
    html.push_str("</div>");
}

fn write_line(html: &mut String, line: &RenderedLine, label: Option<&str>) {
    if let Some(label) = label {
        let _ = write!(html, "<div class=\"block-header\">{}</div>", escape(label));
    }

    match line {
        RenderedLine::Plain(text) => {
            let _ = write!(html, "<span class=\"lyrics-line\">{}</span><br/>", lyric_html(text));
        }
        RenderedLine::ChordOnly(chords) => {
            let _ = write!(
                html,
                "<span class=\"lyrics-line\"><span class=\"chords\">{}</span></span><br/>",
                escape(chords.trim())
            );
        }
        RenderedLine::Annotated(segments) => {
            html.push_str("<span class=\"lyrics-line annotated\">");
            for segment in segments {
                if let Some(chords) = &segment.chords {
                    let _ = write!(html, "<span class=\"chords2\">{}</span>", escape(chords));
                }
                html.push_str(&lyric_html(&segment.lyric));
            }
            html.push_str("</span><br/>");
        }
        RenderedLine::Mixed { text, chords } => {
            let _ = write!(
                html,
                "<span class=\"lyrics-line\">{}<span class=\"chords\">&nbsp;{}</span></span><br/>",
                lyric_html(text),
                escape(chords.trim())
            );
        }
        RenderedLine::Break => html.push_str("<br/>"),
    }
}

/// Escaped lyric text; blank text becomes a non-breaking space so the chord
/// above it keeps its place.
fn lyric_html(text: &str) -> String {
    if text.trim().is_empty() {
        "&nbsp;".to_string()
    } else {
        escape(text)
    }
}

/// Monospaced layout in a single `<pre>`.
///
/// Header lines are dropped, chord lines and trailing chord runs are wrapped
/// in `<span class="chords">` and chorus lines are indented. Two blank lines
/// end the chorus indentation.
pub fn render_preformatted<S: AsRef<str>>(lines: &[S], options: &RenderOptions) -> String {
    let indent = " ".repeat(PRE_CHORUS_INDENT);
    let mut current = BlockType::Inne;
    let mut blank_run = 0;
    let mut body = String::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].as_ref();
        i += 1;

        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run >= BLANK_LINES_CLOSING_BLOCK {
                current = BlockType::Inne;
            }
            body.push('\n');
            continue;
        }
        blank_run = 0;

        if let Some(block_type) = header_type(line) {
            current = block_type;
            continue;
        }

        if options.skip_tabulatures {
            let run = tabulatura_succeeding_lines(lines, i - 1);
            if run >= crate::constants::tab::MIN_RUN {
                i += run - 1;
                continue;
            }
        }

        let spaces = if current == BlockType::Refren { indent.as_str() } else { "" };

        if is_chord_line(line) {
            if !options.skip_lyric_chords {
                let _ = writeln!(body, "<span class=\"chords\">{spaces}{}</span>", escape(line));
            }
            continue;
        }

        match chord_part_start(line) {
            Some(split) if split > 0 => {
                let (text, chords) = line.split_at(split);
                if options.skip_lyric_chords {
                    let _ = writeln!(body, "{spaces}{}", escape(text.trim_end()));
                } else {
                    let _ = writeln!(body, "{spaces}{}<span class=\"chords\">{}</span>", escape(text), escape(chords));
                }
            }
            _ => {
                let _ = writeln!(body, "{spaces}{}", escape(line));
            }
        }
    }

    format!("<pre>{body}</pre>")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn rendered(text: &str) -> RenderedLyrics {
        let lines: Vec<&str> = text.lines().collect();
        render(&lines, "", &RenderOptions::default())
    }

    fn lyric_text(line: &RenderedLine) -> String {
        match line {
            RenderedLine::Annotated(segments) => segments.iter().map(|s| s.lyric.as_str()).collect(),
            RenderedLine::Plain(text) => text.clone(),
            other => panic!("not a lyric line: {other:?}"),
        }
    }

    #[test]
    fn empty_song_renders_nothing() {
        let result = render::<&str>(&[], "", &RenderOptions::default());
        assert!(result.is_empty());
        assert_eq!(result.to_html(), "");
        assert!(result.glossary.is_empty());
    }

    #[test]
    fn headers_open_numbered_blocks() {
        let result = rendered("Zwrotka\nC       G\nHello world there\n\nRef.\nLa la\nZwrotka\nDruga");
        let blocks: Vec<&Block> = result.blocks().collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].block_type, BlockType::Zwrotka);
        assert_eq!(blocks[0].label.as_deref(), Some("1"));
        assert_eq!(blocks[1].block_type, BlockType::Refren);
        assert_eq!(blocks[1].label.as_deref(), Some("refren"));
        assert_eq!(blocks[2].label.as_deref(), Some("2"));
    }

    #[test]
    fn chord_line_merges_with_lyric_losslessly() {
        let result = rendered("Zwrotka\nC       G\nHello world there");
        let block = result.blocks().next().unwrap();
        let line = block.lines().next().unwrap();
        assert!(matches!(line, RenderedLine::Annotated(_)));
        assert_eq!(lyric_text(line), "Hello world there");
    }

    #[test]
    fn single_blank_is_a_break_and_double_blank_closes() {
        let result = rendered("Zwrotka\nRaz\n\nDwa\n\n\nLuzem");
        assert_eq!(result.blocks().count(), 1);
        let block = result.blocks().next().unwrap();
        assert_eq!(
            block.lines().cloned().collect::<Vec<_>>(),
            vec![
                RenderedLine::Plain("Raz".into()),
                RenderedLine::Break,
                RenderedLine::Plain("Dwa".into())
            ]
        );
        // both blanks end up after the block, then the loose line
        assert_eq!(result.nodes.len(), 4);
        assert_eq!(result.nodes[3], Node::Line(RenderedLine::Plain("Luzem".into())));
    }

    #[test]
    fn trailing_breaks_move_outside_block_in_html() {
        let html = rendered("Ref.\nLa la\n\nZwrotka\nRaz").to_html();
        assert!(html.contains("</div><br/><div class=\"block-zwrotka\">"), "{html}");
        assert!(html.contains("La la</span><br/></div>"));
    }

    #[test]
    fn chords_without_lyrics_stay_chord_lines() {
        let result = rendered("C G\nAm F\nTekst");
        assert_eq!(result.nodes[0], Node::Line(RenderedLine::ChordOnly("C G".into())));
        assert!(matches!(result.nodes[1], Node::Line(RenderedLine::Annotated(_))));
        assert_eq!(result.chords, vec!["C", "G", "Am", "F"]);
    }

    #[test]
    fn chord_line_does_not_swallow_header() {
        let result = rendered("C G\nRef.\nLa");
        assert_eq!(result.nodes[0], Node::Line(RenderedLine::ChordOnly("C G".into())));
        assert_eq!(result.blocks().next().unwrap().block_type, BlockType::Refren);
    }

    #[test]
    fn blocks_follow_line_classification() {
        let lines = ["Ref.", "C G", "Hej", "Zwrotka 2", "a", "Ho"];
        let headers: Vec<BlockType> = LyricLine::classify_all(&lines)
            .iter()
            .filter(|line| line.is_header())
            .map(|line| line.block_type)
            .collect();

        let result = render(&lines, "", &RenderOptions::default());
        let blocks: Vec<BlockType> = result.blocks().map(|b| b.block_type).collect();
        assert_eq!(blocks, headers);
        assert_eq!(blocks, vec![BlockType::Refren, BlockType::Zwrotka]);
    }

    #[test]
    fn mixed_line_splits_at_trailing_chords() {
        let result = rendered("Hello   C G");
        assert_eq!(
            result.nodes[0],
            Node::Line(RenderedLine::Mixed {
                text: "Hello   ".into(),
                chords: "C G".into()
            })
        );
        assert!(result.to_html().contains("Hello   <span class=\"chords\">&nbsp;C G</span>"));
    }

    #[test]
    fn tablature_becomes_nested_block() {
        let song = "Solo\ne|---0---|\nH|-1-----|\nG|---2---|\nPo solo";
        let result = rendered(song);
        let solo = result.blocks().next().unwrap();
        assert_eq!(solo.block_type, BlockType::Solo);
        let Node::Block(tab) = &solo.nodes[0] else {
            panic!("expected nested tablature block");
        };
        assert_eq!(tab.block_type, BlockType::Tabulatura);
        assert_eq!(tab.nodes.len(), 3);
        assert_eq!(solo.nodes[1], Node::Line(RenderedLine::Plain("Po solo".into())));

        let html = result.to_html();
        assert!(html.contains("<div class=\"block-tabulatura\"><pre>e|---0---|\nH|-1-----|\nG|---2---|</pre></div>"));

        let skipped = render(&song.lines().collect::<Vec<_>>(), "", &RenderOptions {
            skip_tabulatures: true,
            ..RenderOptions::default()
        });
        assert_eq!(skipped.blocks().next().unwrap().nodes.len(), 1);
    }

    #[test]
    fn header_emitted_once_before_first_annotated_line() {
        let html = rendered("Zwrotka\nPierwsza\nC   G\nDruga linia\nC   G\nTrzecia linia").to_html();
        assert_eq!(html.matches("block-header").count(), 1);
        let header = html.find("<div class=\"block-header\">1</div>").unwrap();
        let annotated = html.find("lyrics-line annotated").unwrap();
        assert!(header < annotated);
        assert!(html.find("Pierwsza").unwrap() < header);
    }

    #[test]
    fn skip_lyric_chords_keeps_only_text() {
        let lines = ["C   G", "Hello world", "G D", "", "Tekst   a E"];
        let options = RenderOptions {
            skip_lyric_chords: true,
            ..RenderOptions::default()
        };
        let result = render(&lines, "", &options);
        assert_eq!(
            result.nodes,
            vec![
                Node::Line(RenderedLine::Plain("Hello world".into())),
                Node::Line(RenderedLine::Break),
                Node::Line(RenderedLine::Plain("Tekst".into())),
            ]
        );
        assert!(!result.to_html().contains("chords"));
    }

    #[test]
    fn html_escapes_text() {
        let html = rendered("Tom & <Jerry>").to_html();
        assert_eq!(html, "<span class=\"lyrics-line\">Tom &amp; &lt;Jerry&gt;</span><br/>");
    }

    #[test]
    fn glossary_collects_song_chords_and_variations() {
        let lines = ["C   G", "Hello world", "Tekst   a"];
        let result = render(&lines, "Cadd9:x32030", &RenderOptions::default());
        let names: Vec<&str> = result.glossary.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "G", "a", "Cadd9"]);
    }

    #[test]
    fn context_numbers_blocks_per_type() {
        let mut context = RenderContext::default();
        assert_eq!(context.open(BlockType::Zwrotka), 1);
        assert_eq!(context.open(BlockType::Refren), 1);
        assert_eq!(context.open(BlockType::Zwrotka), 2);
        assert_eq!(context.label(BlockType::Zwrotka).as_deref(), Some("2"));
        assert_eq!(context.label(BlockType::Solo), None);
    }

    #[test]
    fn renders_are_independent() {
        let renderer = LyricsRenderer::default();
        let song = ["Zwrotka", "Raz", "Zwrotka", "Dwa"];
        let first = renderer.render(&song, "");
        let second = renderer.render(&song, "");
        assert_eq!(first, second);
        assert_eq!(second.blocks().last().unwrap().label.as_deref(), Some("2"));
    }

    #[test]
    fn preformatted_layout() {
        let lines = ["Ref.", "C   G", "La la", "Hello   C G", "", "", "Zwykła"];
        let pre = render_preformatted(&lines, &RenderOptions::default());
        assert_eq!(
            pre,
            "<pre><span class=\"chords\">     C   G</span>\n     La la\n     Hello   <span class=\"chords\">C G</span>\n\n\nZwykła\n</pre>"
        );
    }

    #[test]
    fn preformatted_skips_tabs_on_request() {
        let lines = ["e|-0-|", "H|-1-|", "G|-0-|", "Koniec"];
        let options = RenderOptions {
            skip_tabulatures: true,
            ..RenderOptions::default()
        };
        assert_eq!(render_preformatted(&lines, &options), "<pre>Koniec\n</pre>");
    }
}

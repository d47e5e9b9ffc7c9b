//! Standalone HTML page for a song.

pub mod css;

use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::warn;

use crate::lyrics::{LyricsRenderer, RenderOptions};
use crate::song::Song;

pub use css::CssOverrides;

/// Stylesheet shared by every song page.
const BASE_CSS: &str = "\
body { font-family: Georgia, serif; font-size: 18px; line-height: 1.4em; }
pre { font-family: monospace; font-size: 16px; }
.chords { color: #b62610; font-weight: 700; }
H1 { color: #b62610; }
H1 .artist, H2 .artist { color: #CCC; font-size: 0.6em; }
.lyrics-line { position: relative; display: inline-block; }
.lyrics-line.annotated { height: 1.2em; margin-top: 0.8em; }
.lyrics-line.annotated .chords2 { color: #b62610; font-weight: 700; display: inline-block; position: absolute; transform: translateY(-1.0em); white-space: nowrap; font-size: 0.9em; }
.block-zwrotka { margin-left: 30px; }
.block-zwrotka .block-header { font-size: 0.7em; color: #CCC; position: absolute; display: inline-block; transform: translateX(-1.8em) translateY(-0.3em); }
.block-refren { margin-left: 70px; border-left: 15px solid #F0F0F0; padding-left: 10px; }
.block-refren .block-header { display: none; }
.capo-info, .authors { color: #AAA; font-size: 0.8em; margin-bottom: 10px; }
.chord-diagrams { margin-top: 20px; }
.chord-diagram { display: inline-block; margin: 5px; }
@media (max-width: 576px) {
.block-zwrotka { margin-left: 5px; }
.block-refren { margin-left: 10px; border-left: 8px solid #F0F0F0; }
}
";

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Font file to embed in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// CSS font family name.
    pub family: String,
    /// Path of the `.ttf` file.
    pub path: PathBuf,
}

impl FontFace {
    /// Font `family` loaded from `path`.
    pub fn new(family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            family: family.into(),
            path: path.into(),
        }
    }
}

/// How to build a song page.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Options for the lyrics themselves.
    pub render: RenderOptions,
    /// Use the monospaced `<pre>` layout instead of blocks.
    pub preformatted: bool,
    /// Leave out the title heading.
    pub skip_headers: bool,
    /// Fonts embedded as `@font-face` rules.
    pub fonts: Vec<FontFace>,
    /// Extra rules appended to the stylesheet.
    pub css: CssOverrides,
}

/// `@font-face` rules for the fonts.
///
/// Every font gets a `{family}_beta` face pointing at the file, plus a
/// `{family}` face with the file inlined as base64 when it can be read.
pub fn font_face_css(fonts: &[FontFace]) -> String {
    let mut css = String::new();
    for font in fonts {
        match fs_err::read(&font.path) {
            Ok(bytes) => {
                let _ = writeln!(
                    css,
                    "@font-face {{ font-family: '{}'; src: url(data:font/truetype;base64,{}) format('truetype'); }}",
                    font.family,
                    base64::encode(bytes)
                );
            }
            Err(e) => warn!("Cannot embed font {}: {e}", font.family),
        }
        let _ = writeln!(
            css,
            "@font-face {{ font-family: '{}_beta'; src: url('{}'); }}",
            font.family,
            font.path.display()
        );
    }
    css
}

/// Complete HTML page for a song: stylesheet, heading, capo and authors,
/// lyrics and chord diagrams. A song without lyric lines gives an empty
/// string.
pub fn lyrics_document(song: &Song, options: &DocumentOptions) -> String {
    let lines = song.lines();
    if lines.is_empty() {
        return String::new();
    }

    let renderer = LyricsRenderer::new(options.render.clone());
    let rendered = renderer.render(&lines, song.variations());

    let mut html = String::from("<html><head>\n<meta charset=\"utf-8\" />\n<style>\n");
    html.push_str(BASE_CSS);
    html.push_str(&font_face_css(&options.fonts));
    if let Some(overrides) = options.css.generate() {
        html.push_str(&overrides);
        html.push('\n');
    }
    html.push_str("</style>\n</head><body>\n");

    if !options.skip_headers {
        let _ = writeln!(
            html,
            "<h1>{} <span class=\"artist\">{}</span></h1>",
            escape(&song.title),
            escape(&song.artist)
        );
    }
    if let Some(capo) = song.capo.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = writeln!(html, "<div class=\"capo-info\">Kapodaster: {}</div>", escape(capo));
    }
    if let Some(authors) = authors_line(song) {
        let _ = writeln!(html, "<div class=\"authors\">{}</div>", escape(&authors));
    }

    if options.preformatted {
        html.push_str(&renderer.render_preformatted(&lines));
    } else {
        html.push_str(&rendered.to_html());
    }
    html.push('\n');
    let render = renderer.options();
    html.push_str(&rendered.glossary_html(render.diagram_style, render.diagram_color.as_deref()));
    html.push_str("</body></html>\n");
    html
}

fn authors_line(song: &Song) -> Option<String> {
    let parts: Vec<String> = [("Słowa", &song.lyrics_author), ("Muzyka", &song.music_author)]
        .into_iter()
        .filter_map(|(label, name)| {
            name.as_deref()
                .filter(|n| !n.trim().is_empty())
                .map(|n| format!("{label}: {}", n.trim()))
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn song() -> Song {
        let mut song = Song::new("Płonie <ognisko>", "Zwrotka 1\nC   G\nPłonie ognisko\n");
        song.artist = "Harcerze".to_string();
        song.capo = Some("Drugi próg".to_string());
        song.lyrics_author = Some("Anonim".to_string());
        song
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a < b & \"c\" 'd'"), "a &lt; b &amp; &quot;c&quot; &#39;d&#39;");
        assert_eq!(escape("zażółć"), "zażółć");
    }

    #[test]
    fn empty_song_has_no_document() {
        assert_eq!(lyrics_document(&Song::default(), &DocumentOptions::default()), "");
    }

    #[test]
    fn document_has_heading_capo_and_lyrics() {
        let html = lyrics_document(&song(), &DocumentOptions::default());
        assert!(html.starts_with("<html><head>"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("<h1>Płonie &lt;ognisko&gt; <span class=\"artist\">Harcerze</span></h1>"));
        assert!(html.contains("<div class=\"capo-info\">Kapodaster: Drugi próg</div>"));
        assert!(html.contains("<div class=\"authors\">Słowa: Anonim</div>"));
        assert!(html.contains("class=\"block-zwrotka\""));
        assert!(html.contains("class=\"chord-diagrams\""));
        assert!(html.trim_end().ends_with("</body></html>"));
    }

    #[test]
    fn skip_headers_and_preformatted() {
        let options = DocumentOptions {
            preformatted: true,
            skip_headers: true,
            ..DocumentOptions::default()
        };
        let html = lyrics_document(&song(), &options);
        assert!(!html.contains("<h1>"));
        assert!(html.contains("<pre>"));
        assert!(html.contains("<span class=\"chords\">C   G</span>"));
    }

    #[test]
    fn css_overrides_land_in_stylesheet() {
        let options = DocumentOptions {
            css: CssOverrides::new().with(".chords", "color", "navy"),
            ..DocumentOptions::default()
        };
        let html = lyrics_document(&song(), &options);
        assert!(html.contains(".chords { color: navy !important; }\n</style>"));
    }

    #[test]
    fn unreadable_font_keeps_file_face() {
        let css = font_face_css(&[FontFace::new("Missing", "/nonexistent/font.ttf")]);
        assert!(!css.contains("base64"));
        assert!(css.contains("font-family: 'Missing_beta'; src: url('/nonexistent/font.ttf');"));
    }
}

//! Structural classification of lyric lines.
//!
//! Header lines (`Zwrotka 2`, `ref.`, `1.`, `solo`) mark where a section
//! starts; runs of guitar tablature are detected by looking a few lines ahead.

use std::sync::LazyLock;

use regex::Regex;

use crate::chords::is_chord_line;
use crate::constants::tab::{LOOKAHEAD_LINES, MIN_RUN};
use crate::types::BlockType;

/// `zwrotka 2`
#[allow(clippy::expect_used)]
static RE_VERSE_NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^zwrotka\s*\d+$").expect("valid regex: RE_VERSE_NUMBERED")
});

/// `2 zwrotka`
#[allow(clippy::expect_used)]
static RE_NUMBERED_VERSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s*zwrotka$").expect("valid regex: RE_NUMBERED_VERSE")
});

/// Bare verse number (`1`, `1.` once punctuation is stripped).
#[allow(clippy::expect_used)]
static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+$").expect("valid regex: RE_NUMBER")
});

/// `refren 2`
#[allow(clippy::expect_used)]
static RE_CHORUS_NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^refren\s*\d+$").expect("valid regex: RE_CHORUS_NUMBERED")
});

/// One tablature string: a string letter followed by frets and markers.
#[allow(clippy::expect_used)]
static RE_TAB_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Ha-h][0-9~|-]*$").expect("valid regex: RE_TAB_LINE")
});

/// A lyric line with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// Raw line text.
    pub text: String,
    /// Whether every token on the line is a chord.
    pub chord_only: bool,
    /// Block type recognized at this line.
    pub block_type: BlockType,
}

impl LyricLine {
    /// Classify every line of a song.
    pub fn classify_all<S: AsRef<str>>(lines: &[S]) -> Vec<Self> {
        (0..lines.len())
            .map(|i| {
                let text = lines[i].as_ref();
                Self {
                    text: text.to_string(),
                    chord_only: is_chord_line(text),
                    block_type: recognize_block_type(lines, i),
                }
            })
            .collect()
    }

    /// Whether the line is a section header rather than content.
    pub fn is_header(&self) -> bool {
        header_type(&self.text).is_some()
    }
}

/// Trim, collapse inner whitespace, lower-case and drop `.`, `;`, `:`.
pub fn normalize_header(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(['.', ';', ':'], "")
}

/// Section type named by a header line, without any look-ahead.
pub fn header_type(line: &str) -> Option<BlockType> {
    if line.trim().is_empty() {
        return None;
    }
    let normalized = normalize_header(line);

    if normalized.contains('|') {
        let parts: Vec<&str> = normalized.split('|').map(str::trim).filter(|p| !p.is_empty()).collect();
        if !parts.is_empty() {
            if parts.iter().all(|p| is_verse_segment(p)) {
                return Some(BlockType::Zwrotka);
            }
            if parts.iter().all(|p| is_chorus_segment(p)) {
                return Some(BlockType::Refren);
            }
        }
    }

    if is_verse_segment(&normalized) {
        return Some(BlockType::Zwrotka);
    }
    if is_chorus_segment(&normalized) {
        return Some(BlockType::Refren);
    }

    match normalized.as_str() {
        "solo" | "wstęp" => Some(BlockType::Solo),
        "recytacja" => Some(BlockType::Recytacja),
        "bridge" => Some(BlockType::Bridge),
        _ => None,
    }
}

/// Block type of line `i`: a header type, [`BlockType::Tabulatura`] when a
/// tablature run starts here, otherwise [`BlockType::Inne`].
pub fn recognize_block_type<S: AsRef<str>>(lines: &[S], i: usize) -> BlockType {
    let Some(line) = lines.get(i) else {
        return BlockType::Inne;
    };

    if let Some(block) = header_type(line.as_ref()) {
        return block;
    }
    if tabulatura_succeeding_lines(lines, i) >= MIN_RUN {
        return BlockType::Tabulatura;
    }
    BlockType::Inne
}

/// Number of consecutive tablature lines starting at `i`, looking at most
/// six lines ahead. Stops at the first blank or non-matching line.
pub fn tabulatura_succeeding_lines<S: AsRef<str>>(lines: &[S], i: usize) -> usize {
    lines
        .iter()
        .skip(i)
        .take(LOOKAHEAD_LINES)
        .map(|line| line.as_ref().trim_start())
        .take_while(|line| !line.is_empty() && RE_TAB_LINE.is_match(line))
        .count()
}

fn is_verse_segment(s: &str) -> bool {
    matches!(s, "zwr" | "zwrotka")
        || RE_VERSE_NUMBERED.is_match(s)
        || RE_NUMBERED_VERSE.is_match(s)
        || RE_NUMBER.is_match(s)
}

fn is_chorus_segment(s: &str) -> bool {
    matches!(s, "ref" | "refren") || RE_CHORUS_NUMBERED.is_match(s)
}

//! Core type definitions shared across the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural section of a song's lyrics.
///
/// Names follow the songbook's Polish vocabulary: a verse is a *zwrotka*,
/// a chorus a *refren*, tablature a *tabulatura*, spoken text a *recytacja*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockType {
    /// Verse.
    Zwrotka,
    /// Chorus.
    Refren,
    /// Bridge section.
    Bridge,
    /// Guitar tablature run.
    Tabulatura,
    /// Instrumental solo or intro (`wstęp`).
    Solo,
    /// Spoken passage.
    Recytacja,
    /// Informational text.
    Info,
    /// Ordinary lyric or text line outside any recognized section.
    #[default]
    Inne,
}

impl BlockType {
    /// Returns all block type variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Zwrotka,
            Self::Refren,
            Self::Bridge,
            Self::Tabulatura,
            Self::Solo,
            Self::Recytacja,
            Self::Info,
            Self::Inne,
        ]
    }

    /// Returns the human-readable name of this block type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zwrotka => "Zwrotka",
            Self::Refren => "Refren",
            Self::Bridge => "Bridge",
            Self::Tabulatura => "Tabulatura",
            Self::Solo => "Solo",
            Self::Recytacja => "Recytacja",
            Self::Info => "Info",
            Self::Inne => "Inne",
        }
    }

    /// CSS class of the block container (`block-zwrotka`, ...).
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Zwrotka => "block-zwrotka",
            Self::Refren => "block-refren",
            Self::Bridge => "block-bridge",
            Self::Tabulatura => "block-tabulatura",
            Self::Solo => "block-solo",
            Self::Recytacja => "block-recytacja",
            Self::Info => "block-info",
            Self::Inne => "block-inne",
        }
    }

    /// Whether lines of this type open a block container.
    #[must_use]
    pub const fn is_section(self) -> bool {
        !matches!(self, Self::Inne)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a song keeps its chords relative to the lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChordsPosition {
    /// No chords found.
    #[default]
    None,
    /// Chords written on their own line above the lyrics.
    AboveLyrics,
    /// Chords trailing the lyric text on the same line.
    AfterText,
    /// Both conventions used equally often.
    Mixed,
}

/// Output format for a chord diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiagramStyle {
    /// Inline SVG, strings vertical.
    #[default]
    Svg,
    /// Inline SVG, strings horizontal with string 1 on top.
    SvgHorizontal,
    /// Fixed-width text, strings horizontal with string 1 on top.
    Ascii,
    /// Fixed-width text, strings vertical.
    AsciiVertical,
}

impl DiagramStyle {
    /// Parse a style name as used in configuration (`svg`, `ascii-vertical`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "svg-horizontal" => Some(Self::SvgHorizontal),
            "ascii" => Some(Self::Ascii),
            "ascii-vertical" => Some(Self::AsciiVertical),
            _ => None,
        }
    }

    /// Whether the style produces SVG markup.
    #[must_use]
    pub const fn is_svg(self) -> bool {
        matches!(self, Self::Svg | Self::SvgHorizontal)
    }
}

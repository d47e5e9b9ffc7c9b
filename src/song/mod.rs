//! Song record: metadata plus the raw lyric text.
//!
//! Songs are stored either as JSON objects or as plain-text lyric files.

pub mod transpose;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lyrics::{LyricsRenderer, RenderedLyrics, SongAnalysis};

pub use transpose::{adjust_capo, capo_fret, capo_name, transpose_lyrics, FRET_NAMES};

/// A songbook entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title.
    #[serde(default)]
    pub title: String,
    /// Performer.
    #[serde(default)]
    pub artist: String,
    /// Capo position in words (`Drugi próg`) or digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capo: Option<String>,
    /// Lyrics with chord lines, as written.
    #[serde(default)]
    pub lyrics: String,
    /// Author of the words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics_author: Option<String>,
    /// Composer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_author: Option<String>,
    /// Song-specific chord diagrams, `Name:code,Name2=code2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords_variations: Option<String>,
    /// Auto-scroll delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolling_delay: Option<i32>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_duration: Option<i32>,
    /// Spotify track URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_link: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// Where the song was taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Song {
    /// Create a song from a title and lyrics.
    pub fn new(title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lyrics: lyrics.into(),
            ..Self::default()
        }
    }

    /// Lyric lines, split on `\r\n`, `\r` or `\n`. Empty lyrics have no lines.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.lyrics)
    }

    /// Line separator used by the lyrics; `\n` when there is none.
    pub fn line_separator(&self) -> &'static str {
        detect_separator(&self.lyrics)
    }

    /// Whether the song has neither lyrics nor a title.
    pub fn is_empty(&self) -> bool {
        self.lyrics.is_empty() && self.title.is_empty()
    }

    /// Declared chord variations, empty when none.
    pub fn variations(&self) -> &str {
        self.chords_variations.as_deref().unwrap_or_default()
    }

    /// Render the lyrics into the markup model.
    pub fn render(&self, renderer: &LyricsRenderer) -> RenderedLyrics {
        renderer.render(&self.lines(), self.variations())
    }

    /// Chord statistics; `None` for a song without lyrics.
    pub fn analyze(&self) -> Option<SongAnalysis> {
        SongAnalysis::analyze(&self.lines(), self.variations())
    }

    /// Parse a JSON song. `file` only labels errors.
    pub fn from_json(text: &str, file: Option<&Path>) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::parse(e.to_string(), file.map(Path::to_path_buf)))
    }

    /// Load a song file.
    ///
    /// `.json` files hold a serialized [`Song`]; anything else is read as
    /// plain lyrics titled after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

        if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
            return Self::from_json(&content, Some(path));
        }

        let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        Ok(Self::new(title, content))
    }
}

/// Split text on any of the three line separators.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(['\r', '\n']) {
        lines.push(&rest[..idx]);
        let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + skip..];
    }
    lines.push(rest);
    lines
}

pub(crate) fn detect_separator(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else if text.contains('\r') && !text.contains('\n') {
        "\r"
    } else {
        "\n"
    }
}

//! Chord statistics of a song.

use std::cmp::Ordering;

use serde::Serialize;

use super::glossary::parse_variations;
use crate::chords::{chord_part_start, extract_chords, is_chord_line};
use crate::types::ChordsPosition;

/// Where and which chords a song uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SongAnalysis {
    /// Distinct chords in order of first appearance.
    pub chords: Vec<String>,
    /// Chord lines directly above a lyric line.
    pub chord_lines_above_lyrics: usize,
    /// Lines ending in a chord run after the text.
    pub chord_lines_after_text: usize,
    /// Dominant chord placement.
    pub chords_position: ChordsPosition,
    /// Declared chord variations, `(name, code)`.
    pub variations: Vec<(String, String)>,
}

impl SongAnalysis {
    /// Analyze song lines; `None` for a song without lines.
    pub fn analyze<S: AsRef<str>>(lines: &[S], chords_variations: &str) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }

        let mut analysis = Self::default();
        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let next = lines.get(i + 1).map_or("", AsRef::as_ref);

            if is_chord_line(line) && !is_chord_line(next) {
                analysis.add_chords(line);
                analysis.chord_lines_above_lyrics += 1;
            } else if let Some(split) = chord_part_start(line).filter(|&s| s > 1) {
                analysis.add_chords(&line[split..]);
                analysis.chord_lines_after_text += 1;
            }
        }

        let (above, after) = (analysis.chord_lines_above_lyrics, analysis.chord_lines_after_text);
        analysis.chords_position = if above + after == 0 {
            ChordsPosition::None
        } else {
            match above.cmp(&after) {
                Ordering::Greater => ChordsPosition::AboveLyrics,
                Ordering::Less => ChordsPosition::AfterText,
                Ordering::Equal => ChordsPosition::Mixed,
            }
        };
        analysis.variations = parse_variations(chords_variations);

        Some(analysis)
    }

    /// Declared diagram code for `chord`, if any.
    pub fn suggestion(&self, chord: &str) -> Option<&str> {
        self.variations
            .iter()
            .find(|(name, _)| name == chord)
            .map(|(_, code)| code.as_str())
    }

    fn add_chords(&mut self, text: &str) {
        for chord in extract_chords(text) {
            if !self.chords.contains(&chord) {
                self.chords.push(chord);
            }
        }
    }
}

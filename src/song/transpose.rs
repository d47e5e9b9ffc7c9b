//! Whole-song transposition and capo bookkeeping.
//!
//! Moving a song up by `n` semitones while keeping the same fingering means
//! the capo moves down by `n` frets, and the other way around.

use std::sync::LazyLock;

use regex::Regex;

use super::{detect_separator, split_lines, Song};
use crate::chords::{chord_part_start, transpose_line};
use crate::constants::chords::CHROMATIC_STEPS;

/// Capo position names, indexed by fret.
pub const FRET_NAMES: [&str; 13] = [
    "Bez kapodastra",
    "Pierwszy próg",
    "Drugi próg",
    "Trzeci próg",
    "Czwarty próg",
    "Piąty próg",
    "Szósty próg",
    "Siódmy próg",
    "Ósmy próg",
    "Dziewiąty próg",
    "Dziesiąty próg",
    "Jedenasty próg",
    "Dwunasty próg",
];

/// Ordinal stems accepted in capo text, with their fret.
const ORDINALS: [(&str, u8); 12] = [
    ("pierwszy", 1),
    ("drugi", 2),
    ("trzeci", 3),
    ("czwarty", 4),
    ("piąty", 5),
    ("szósty", 6),
    ("siódmy", 7),
    ("ósmy", 8),
    ("dziewiąty", 9),
    ("dziesiąty", 10),
    ("jedenasty", 11),
    ("dwunasty", 12),
];

#[allow(clippy::expect_used)]
static RE_FRET_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").expect("valid regex: RE_FRET_NUMBER")
});

/// Fret named by capo text: digits first, then ordinal words with or
/// without `próg`. Anything else (including `Bez kapodastra`) is fret 0.
pub fn capo_fret(capo: &str) -> u8 {
    if let Some(m) = RE_FRET_NUMBER.find(capo) {
        return m.as_str().parse().unwrap_or(0);
    }

    let lower = capo.to_lowercase();
    ORDINALS
        .iter()
        .find(|(stem, _)| lower.contains(stem))
        .map_or(0, |&(_, fret)| fret)
}

/// Name of a capo fret, wrapping past twelve.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn capo_name(fret: i32) -> &'static str {
    FRET_NAMES[fret.rem_euclid(CHROMATIC_STEPS) as usize]
}

/// Capo text after moving the song `semitones` up. Blank capo stays as is.
pub fn adjust_capo(capo: &str, semitones: i32) -> String {
    if capo.trim().is_empty() {
        return capo.to_string();
    }
    capo_name(i32::from(capo_fret(capo)) - semitones.rem_euclid(CHROMATIC_STEPS)).to_string()
}

/// Transpose the chords of a single lyric line: whole chord lines, or the
/// trailing chord run of a mixed line. Text lines come back unchanged.
pub fn transpose_lyric_line(line: &str, semitones: i32) -> String {
    match chord_part_start(line) {
        Some(0) => transpose_line(line, semitones),
        Some(split) => format!("{}{}", &line[..split], transpose_line(&line[split..], semitones)),
        None => line.to_string(),
    }
}

/// Transpose every chord in a lyric text, keeping its line separator.
pub fn transpose_lyrics(lyrics: &str, semitones: i32) -> String {
    if semitones == 0 {
        return lyrics.to_string();
    }

    split_lines(lyrics)
        .into_iter()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                transpose_lyric_line(line, semitones)
            }
        })
        .collect::<Vec<_>>()
        .join(detect_separator(lyrics))
}

impl Song {
    /// Move the song `semitones` up: chords go up, the capo goes down.
    pub fn adjust_tonation(&mut self, semitones: i32) {
        if semitones == 0 || self.lyrics.is_empty() {
            return;
        }

        self.lyrics = transpose_lyrics(&self.lyrics, semitones);
        self.capo = self.capo.as_deref().map(|capo| adjust_capo(capo, semitones));
    }

    /// Transposed copy of the song.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        let mut song = self.clone();
        song.adjust_tonation(semitones);
        song
    }
}

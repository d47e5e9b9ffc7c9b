//! Chord token recognition and chromatic transposition.
//!
//! Chords follow the Polish songbook convention: `H` is B natural, `B` is
//! B flat, a lower-case root marks a minor chord and sharps may be spelled
//! with an `is` suffix (`Cis`, `fis`).

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::chords::CHROMATIC_STEPS;

/// Chromatic scale in sharp form, Polish spelling (`B` = B flat, `H` = B natural).
const CHROMATIC_SCALE: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "B", "H"];

/// Plain chords accepted without consulting the suffix grammar.
const COMMON_CHORDS: &[&str] = &[
    "C", "Cm", "D", "Dm", "E", "Em", "F", "Fm", "G", "Gm", "A", "Am", "B", "Bm", "H", "Hm",
];

lazy_static! {
    /// Root spellings mapped onto their entry in the chromatic scale.
    static ref SHARP_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Db", "C#");
        m.insert("Eb", "D#");
        m.insert("Fb", "E");
        m.insert("Gb", "F#");
        m.insert("Ab", "G#");
        m.insert("Bb", "B");
        m.insert("Hb", "B");
        m.insert("Cb", "H");
        m.insert("A#", "B");
        m.insert("B#", "H");
        m.insert("E#", "F");
        m.insert("H#", "C");
        m
    };
}

/// Root letter, accidental, quality, extension and alternative notation.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Ha-h](#|b)?(m|min|maj|dim|aug)?(2|4|5|6|7|9|11|13)?(sus2|sus4|add9|add11|maj7|min7|dim7|aug7|is|\+)?$",
    )
    .expect("valid regex: RE_CHORD")
});

/// Root with optional accidental, followed by the untouched suffix.
#[allow(clippy::expect_used)]
static RE_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Ha-h](?:#|b)?)(.*)$").expect("valid regex: RE_ROOT")
});

/// Alternating runs of whitespace and non-whitespace.
#[allow(clippy::expect_used)]
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+|\S+").expect("valid regex: RE_TOKEN")
});

/// How the source spelled the accidental of a chord root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `C#`, or no accidental at all.
    Sharp,
    /// `Db`; written back in sharp form after transposition.
    Flat,
    /// `Cis`; sharps are written back with the `is` suffix.
    Polish,
}

/// A recognized chord split into its transposable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Chromatic index of the root, always in `0..12`.
    pub pitch_class: usize,
    /// Accidental spelling of the source token.
    pub notation: Notation,
    /// Lower-case root (minor by convention).
    pub minor: bool,
    /// Quality and extension text, never touched by transposition.
    pub suffix: String,
}

impl ChordToken {
    /// Parse a chord token. Returns `None` for anything [`is_chord`] rejects
    /// or whose root has no place in the chromatic scale.
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || !is_chord(token) {
            return None;
        }

        let polish = token.contains("is");
        let normalized = token.replace("is", "#");
        let caps = RE_ROOT.captures(&normalized)?;
        let root = caps.get(1)?.as_str();
        let suffix = caps.get(2).map_or("", |m| m.as_str());

        let mut chars = root.chars();
        let first = chars.next()?;
        let minor = first.is_lowercase();
        let upper = format!("{}{}", first.to_ascii_uppercase(), chars.as_str());
        let canonical = SHARP_ALIASES.get(upper.as_str()).copied().unwrap_or(upper.as_str());
        let pitch_class = CHROMATIC_SCALE.iter().position(|&step| step == canonical)?;

        let notation = if polish {
            Notation::Polish
        } else if root.ends_with('b') {
            Notation::Flat
        } else {
            Notation::Sharp
        };

        Some(Self {
            pitch_class,
            notation,
            minor,
            suffix: suffix.to_string(),
        })
    }

    /// Move the root by `semitones` (negative = down), wrapping around the octave.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self {
            pitch_class: shift_pitch_class(self.pitch_class, semitones),
            suffix: self.suffix.clone(),
            ..*self
        }
    }

    /// Root name in scale spelling, lower-cased for minor chords.
    pub fn root_name(&self) -> String {
        let root = CHROMATIC_SCALE[self.pitch_class % CHROMATIC_SCALE.len()];
        let root = if self.minor { root.to_lowercase() } else { root.to_string() };
        match self.notation {
            Notation::Polish => root.replace('#', "is"),
            Notation::Sharp | Notation::Flat => root,
        }
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.notation {
            Notation::Polish => self.suffix.replace('#', "is"),
            Notation::Sharp | Notation::Flat => self.suffix.clone(),
        };
        write!(f, "{}{suffix}", self.root_name())
    }
}

/// New chromatic index `(index + n) mod 12`. The shift is reduced first so
/// any `i32` is accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
const fn shift_pitch_class(index: usize, semitones: i32) -> usize {
    let index = (index % CHROMATIC_STEPS as usize) as i32;
    (index + semitones.rem_euclid(CHROMATIC_STEPS)).rem_euclid(CHROMATIC_STEPS) as usize
}

/// Whether a single token is a chord name.
///
/// Accepts a short list of plain chords, the suffix grammar
/// `root[accidental][quality][extension][alt-notation]`, and either of those
/// once an `is` sharp spelling is removed (`Fis`, `gis7`).
pub fn is_chord(token: &str) -> bool {
    if COMMON_CHORDS.contains(&token) || COMMON_CHORDS.contains(&token.to_uppercase().as_str()) {
        return true;
    }

    RE_CHORD.is_match(token) || RE_CHORD.is_match(&token.replace("is", ""))
}

/// Transpose a single chord by `semitones`. Unrecognized input comes back unchanged.
pub fn transpose(chord: &str, semitones: i32) -> String {
    ChordToken::parse(chord).map_or_else(|| chord.to_string(), |token| token.transposed(semitones).to_string())
}

/// Transpose every chord token of a line, leaving other tokens and all
/// whitespace exactly where they were.
pub fn transpose_line(line: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for m in RE_TOKEN.find_iter(line) {
        let token = m.as_str();
        if token.starts_with(char::is_whitespace) || !is_chord(token) {
            out.push_str(token);
        } else {
            out.push_str(&transpose(token, semitones));
        }
    }
    out
}

/// Whether the line holds at least one token and every token is a chord.
pub fn is_chord_line(line: &str) -> bool {
    let mut tokens = line.split([' ', '\t']).filter(|t| !t.is_empty()).peekable();
    tokens.peek().is_some() && tokens.all(is_chord)
}

/// Byte offset where a trailing run of chords begins.
///
/// `Some(0)` when the whole line is chords, `Some(i)` for the first word
/// start `i` such that `line[i..]` is a chord line, `None` otherwise.
pub fn chord_part_start(line: &str) -> Option<usize> {
    if line.is_empty() {
        return None;
    }
    if is_chord_line(line) {
        return Some(0);
    }

    let mut previous_blank = false;
    for (idx, c) in line.char_indices() {
        let blank = c == ' ' || c == '\t';
        if previous_blank && !blank && is_chord_line(&line[idx..]) {
            return Some(idx);
        }
        previous_blank = blank;
    }
    None
}

/// Distinct chord tokens of a line, in order of first appearance.
pub fn extract_chords(line: &str) -> Vec<String> {
    let mut chords: Vec<String> = Vec::new();
    for token in line.split_whitespace().filter(|t| is_chord(t)) {
        if !chords.iter().any(|c| c == token) {
            chords.push(token.to_string());
        }
    }
    chords
}

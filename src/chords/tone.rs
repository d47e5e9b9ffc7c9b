//! A single fretboard position within a chord diagram.

use std::fmt;

/// One finger position, or a barre spanning several strings.
///
/// Strings are numbered from the thinnest: E1, H2, G3, D4, A5, E6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuitarChordTone {
    /// String number (1-6); `None` for a barre.
    pub string: Option<u8>,
    /// Finger number, 0 when unspecified.
    pub finger: u8,
    /// Fret number.
    pub fret: u8,
    /// Whether this tone is a barre laid across several strings.
    pub crossbar: bool,
}

impl GuitarChordTone {
    /// A fretted string.
    pub const fn new(string: u8, finger: u8, fret: u8) -> Self {
        Self {
            string: Some(string),
            finger,
            fret,
            crossbar: false,
        }
    }

    /// A barre at `fret`, not tied to any string.
    pub const fn barre(fret: u8) -> Self {
        Self {
            string: None,
            finger: 0,
            fret,
            crossbar: true,
        }
    }

    /// Whether this tone presses `string` at `fret` (barres never match).
    pub fn presses(&self, string: u8, fret: u8) -> bool {
        !self.crossbar && self.string == Some(string) && self.fret == fret
    }
}

impl fmt::Display for GuitarChordTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.string.unwrap_or(0),
            self.finger,
            self.fret,
            if self.crossbar { "X" } else { "" }
        )
    }
}

//! Fretboard geometry of a single guitar chord.

use std::collections::BTreeSet;

use super::tone::GuitarChordTone;
use crate::constants::chords::STRING_COUNT;

/// What a diagram shows above or beside one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringState {
    /// Not played (`×`).
    Muted,
    /// Played without fretting (`○`).
    Open,
    /// Pressed by a finger.
    Fretted,
    /// Carries no decoration (usually covered by a barre).
    Undecorated,
}

/// A chord diagram: named tones plus muted and open strings.
///
/// A string is at most one of muted, open or fretted; the builder methods
/// keep the three sets disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarChordDiagram {
    /// Displayed chord name.
    pub name: String,
    /// Fretted tones and barres, in insertion order.
    pub tones: Vec<GuitarChordTone>,
    muted: BTreeSet<u8>,
    open: BTreeSet<u8>,
}

/// A barre resolved to the strings it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarreSpan {
    /// Fret the barre lies on.
    pub fret: u8,
    /// Lowest covered string number.
    pub low: u8,
    /// Highest covered string number.
    pub high: u8,
}

impl BarreSpan {
    /// Whether the barre covers `string` at `fret`.
    pub fn covers(&self, string: u8, fret: u8) -> bool {
        self.fret == fret && (self.low..=self.high).contains(&string)
    }
}

impl GuitarChordDiagram {
    /// Empty diagram with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tones: Vec::new(),
            muted: BTreeSet::new(),
            open: BTreeSet::new(),
        }
    }

    /// Add a fretted tone; out-of-range strings are ignored.
    #[must_use]
    pub fn with_tone(mut self, string: u8, finger: u8, fret: u8) -> Self {
        self.add_tone(GuitarChordTone::new(string, finger, fret));
        self
    }

    /// Add a barre at `fret`.
    #[must_use]
    pub fn with_barre(mut self, fret: u8) -> Self {
        self.add_tone(GuitarChordTone::barre(fret));
        self
    }

    /// Mark strings as played open.
    #[must_use]
    pub fn with_open(mut self, strings: &[u8]) -> Self {
        for &string in strings {
            self.set_open(string);
        }
        self
    }

    /// Mark strings as muted.
    #[must_use]
    pub fn with_muted(mut self, strings: &[u8]) -> Self {
        for &string in strings {
            self.set_muted(string);
        }
        self
    }

    /// Rename the diagram, keeping its geometry.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a tone. A fretted string stops being open or muted.
    pub fn add_tone(&mut self, tone: GuitarChordTone) {
        if let Some(string) = tone.string {
            if !is_valid_string(string) {
                return;
            }
            self.open.remove(&string);
            self.muted.remove(&string);
        }
        self.tones.push(tone);
    }

    /// Mark a string as open unless a finger already frets it.
    pub fn set_open(&mut self, string: u8) {
        if is_valid_string(string) && !self.is_fretted(string) {
            self.muted.remove(&string);
            self.open.insert(string);
        }
    }

    /// Mark a string as muted unless a finger already frets it.
    pub fn set_muted(&mut self, string: u8) {
        if is_valid_string(string) && !self.is_fretted(string) {
            self.open.remove(&string);
            self.muted.insert(string);
        }
    }

    /// Muted strings, ascending.
    pub const fn muted_strings(&self) -> &BTreeSet<u8> {
        &self.muted
    }

    /// Open strings, ascending.
    pub const fn open_strings(&self) -> &BTreeSet<u8> {
        &self.open
    }

    /// Tones pressed by individual fingers (barres excluded).
    pub fn fretted(&self) -> impl Iterator<Item = &GuitarChordTone> {
        self.tones.iter().filter(|t| !t.crossbar)
    }

    /// The first barre tone, if any.
    pub fn barre(&self) -> Option<&GuitarChordTone> {
        self.tones.iter().find(|t| t.crossbar)
    }

    /// Whether the diagram contains a barre.
    pub fn has_barre(&self) -> bool {
        self.barre().is_some()
    }

    /// Fretted tone on `string` at `fret`.
    pub fn tone_at(&self, string: u8, fret: u8) -> Option<&GuitarChordTone> {
        self.tones.iter().find(|t| t.presses(string, fret))
    }

    /// What the diagram shows for `string`.
    pub fn string_state(&self, string: u8) -> StringState {
        if self.muted.contains(&string) {
            StringState::Muted
        } else if self.open.contains(&string) {
            StringState::Open
        } else if self.is_fretted(string) {
            StringState::Fretted
        } else {
            StringState::Undecorated
        }
    }

    /// Strings covered by the barre: the range of other tones on the same
    /// fret, or all six strings when no other tone shares it.
    pub fn barre_span(&self) -> Option<BarreSpan> {
        let barre = self.barre()?;
        let strings = self
            .fretted()
            .filter(|t| t.fret == barre.fret)
            .filter_map(|t| t.string);

        let (low, high) = strings.fold(None, |range: Option<(u8, u8)>, s| match range {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
        .unwrap_or((1, STRING_COUNT));

        Some(BarreSpan { fret: barre.fret, low, high })
    }

    /// First fret of a diagram window `window` frets wide.
    ///
    /// Chords fitting below `window` start at fret 1 (drawn with a nut);
    /// anything higher starts at its lowest fretted position.
    pub fn start_fret(&self, window: u8) -> u8 {
        let frets = self.tones.iter().map(|t| t.fret).filter(|&f| f > 0);
        let min = frets.clone().min().unwrap_or(1);
        let max = frets.max().unwrap_or(1);

        if max <= window {
            1
        } else {
            min
        }
    }

    /// Move the shape `semitones` frets up the neck.
    ///
    /// Without an existing barre, every finger number moves up by one to free
    /// the index finger, a full barre is added at `semitones`, and the muted
    /// and open sets are cleared: the new barre covers all six strings.
    pub fn transpose_up_bar(&mut self, semitones: u8) {
        if semitones == 0 {
            return;
        }

        let had_barre = self.has_barre();
        for tone in &mut self.tones {
            tone.fret = tone.fret.saturating_add(semitones);
            if !had_barre {
                tone.finger = tone.finger.saturating_add(1);
            }
        }

        if !had_barre {
            self.tones.push(GuitarChordTone::barre(semitones));
            self.muted.clear();
            self.open.clear();
        }
    }

    fn is_fretted(&self, string: u8) -> bool {
        self.fretted().any(|t| t.string == Some(string))
    }
}

fn is_valid_string(string: u8) -> bool {
    (1..=STRING_COUNT).contains(&string)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn open_a() -> GuitarChordDiagram {
        GuitarChordDiagram::new("A")
            .with_tone(2, 3, 2)
            .with_tone(3, 2, 2)
            .with_tone(4, 1, 2)
            .with_open(&[1, 5])
            .with_muted(&[6])
    }

    #[test]
    fn open_position_starts_at_first_fret() {
        assert_eq!(open_a().start_fret(4), 1);
    }

    #[test]
    fn moveable_position_starts_at_lowest_fret() {
        let chord = GuitarChordDiagram::new("x")
            .with_tone(1, 1, 5)
            .with_tone(2, 3, 7);
        assert_eq!(chord.start_fret(4), 5);
    }

    #[test]
    fn empty_diagram_starts_at_first_fret() {
        assert_eq!(GuitarChordDiagram::new("?").start_fret(4), 1);
    }

    #[test]
    fn string_sets_stay_disjoint() {
        let mut chord = open_a();
        chord.set_muted(1);
        assert_eq!(chord.string_state(1), StringState::Muted);
        assert!(!chord.open_strings().contains(&1));

        // fretted strings cannot be muted or opened
        chord.set_open(2);
        assert_eq!(chord.string_state(2), StringState::Fretted);

        chord.add_tone(GuitarChordTone::new(5, 0, 3));
        assert_eq!(chord.string_state(5), StringState::Fretted);
        assert!(!chord.open_strings().contains(&5));
    }

    #[test]
    fn invalid_strings_are_ignored() {
        let chord = GuitarChordDiagram::new("x").with_tone(7, 1, 1).with_open(&[0, 9]);
        assert!(chord.tones.is_empty());
        assert!(chord.open_strings().is_empty());
    }

    #[test]
    fn transpose_up_bar_adds_barre() {
        let mut chord = open_a();
        chord.transpose_up_bar(1);

        let fretted: Vec<(Option<u8>, u8, u8)> =
            chord.fretted().map(|t| (t.string, t.finger, t.fret)).collect();
        assert_eq!(fretted, vec![(Some(2), 4, 3), (Some(3), 3, 3), (Some(4), 2, 3)]);

        let barre = chord.barre().expect("barre added");
        assert_eq!(barre.fret, 1);
        assert!(chord.muted_strings().is_empty());
        assert!(chord.open_strings().is_empty());
    }

    #[test]
    fn transpose_up_bar_with_existing_barre_only_shifts() {
        let mut chord = open_a();
        chord.transpose_up_bar(1);
        chord.transpose_up_bar(2);

        assert_eq!(chord.tones.iter().filter(|t| t.crossbar).count(), 1);
        assert_eq!(chord.barre().unwrap().fret, 3);
        assert_eq!(chord.tone_at(2, 5).unwrap().finger, 4);
    }

    #[test]
    fn transpose_up_bar_by_zero_is_noop() {
        let mut chord = open_a();
        chord.transpose_up_bar(0);
        assert_eq!(chord, open_a());
    }

    #[test]
    fn barre_spans_all_strings_without_colocated_tones() {
        let chord = GuitarChordDiagram::new("F")
            .with_tone(3, 2, 2)
            .with_tone(4, 4, 3)
            .with_barre(1);
        assert_eq!(chord.barre_span(), Some(BarreSpan { fret: 1, low: 1, high: 6 }));
    }

    #[test]
    fn barre_spans_colocated_tones() {
        let chord = GuitarChordDiagram::new("B")
            .with_tone(1, 1, 1)
            .with_tone(5, 1, 1)
            .with_tone(3, 3, 3)
            .with_barre(1);
        let span = chord.barre_span().unwrap();
        assert_eq!((span.low, span.high), (1, 5));
        assert!(span.covers(3, 1));
        assert!(!span.covers(6, 1));
    }
}

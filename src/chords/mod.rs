//! Chord names, transposition and guitar chord diagrams.
//!
//! - `chord`: token recognition and chromatic transposition
//! - `tone` / `diagram`: fretboard geometry of one chord
//! - `render`: ASCII and SVG drawings of a diagram
//! - `library`: built-in shapes and the compact diagram code

pub mod chord;
pub mod diagram;
pub mod library;
pub mod render;
pub mod tone;

// Re-export commonly used items
pub use chord::{chord_part_start, extract_chords, is_chord, is_chord_line, transpose, transpose_line, ChordToken, Notation};
pub use diagram::{BarreSpan, GuitarChordDiagram, StringState};
pub use library::{chord_by_ascii, resolve, standard_chord};
pub use tone::GuitarChordTone;

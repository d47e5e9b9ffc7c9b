//! `Songbook` - chord-annotated lyrics engine.
//!
//! Recognizes chords in plain-text songs, transposes them, aligns chord
//! lines over lyrics, draws guitar chord diagrams and renders songs as HTML.


// Re-export public modules for use in integration tests and as a library
pub mod batch;
pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod html;
pub mod lyrics;
pub mod song;
pub mod types;

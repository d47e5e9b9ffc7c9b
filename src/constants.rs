//! Engine constants.
//!
//! Centralizes magic numbers shared by the chord, lyrics and diagram modules.

/// Chord model constants.
pub mod chords {
    /// Number of pitch classes in the chromatic scale.
    pub const CHROMATIC_STEPS: i32 = 12;

    /// Number of strings on a standard guitar.
    pub const STRING_COUNT: u8 = 6;
}

/// Chord diagram constants.
pub mod diagram {
    /// Number of frets shown in a diagram window.
    pub const FRET_WINDOW: u8 = 4;

    /// Radius of a fretted tone circle in SVG output.
    pub const CIRCLE_RADIUS: i32 = 6;

    /// Default size of the vertical SVG diagram (width, height).
    pub const SVG_VERTICAL_SIZE: (i32, i32) = (80, 100);

    /// Default size of the horizontal SVG diagram (width, height).
    pub const SVG_HORIZONTAL_SIZE: (i32, i32) = (100, 80);

    /// Fill colour used when no custom colour is configured.
    pub const DEFAULT_FILL: &str = "black";
}

/// Lyrics rendering constants.
pub mod render {
    /// Chord line length, as a percent of the lyric line length, above which
    /// positional alignment is abandoned.
    pub const DEFAULT_LYRICS_RATIO_PERCENT: usize = 50;

    /// Upper bound accepted for the ratio from configuration.
    pub const MAX_LYRICS_RATIO_PERCENT: usize = 1000;

    /// Consecutive blank lines that force the current block to close.
    pub const BLANK_LINES_CLOSING_BLOCK: usize = 2;

    /// Indentation used for chorus lines in the preformatted layout.
    pub const PRE_CHORUS_INDENT: usize = 5;
}

/// Tablature detection constants.
pub mod tab {
    /// How many lines are inspected from the candidate start line.
    pub const LOOKAHEAD_LINES: usize = 6;

    /// Minimum run of matching lines classified as tablature.
    pub const MIN_RUN: usize = 3;
}

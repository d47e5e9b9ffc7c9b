//! Chord-over-lyric alignment.
//!
//! Songbooks write chords on their own line, placed above the syllable they
//! belong to in a monospaced layout. Alignment cuts the chord line and the
//! lyric line at the same character columns so every chord can be anchored
//! inline, right before its lyric segment. Columns are character indices into
//! the source lines, so the lyric segments always concatenate back to the
//! original lyric line.

/// One chord annotation and the lyric text it precedes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSegment {
    /// Trimmed chord text, `None` when the columns above the lyric are blank.
    pub chords: Option<String>,
    /// Lyric text, verbatim.
    pub lyric: String,
}

impl AlignedSegment {
    fn new(chords: &str, lyric: String) -> Self {
        let chords = chords.trim();
        Self {
            chords: (!chords.is_empty()).then(|| chords.to_string()),
            lyric,
        }
    }
}

/// Align a chord line with the lyric line below it.
///
/// When the chord line is long compared to the lyric (more than
/// `ratio_percent` percent of its normalized length), columns are unreliable:
/// the whole chord line becomes one annotation before the whole lyric.
pub fn align_line(chord_line: &str, lyric_line: &str, ratio_percent: usize) -> Vec<AlignedSegment> {
    if looks_like_lyrics_too_short(chord_line, lyric_line, ratio_percent) {
        return vec![AlignedSegment::new(chord_line, lyric_line.to_string())];
    }
    slice_columns(chord_line, lyric_line)
}

/// Cut both lines at every chord start column.
///
/// Stops early when a lyric segment after the first is blank (the remaining
/// chords and lyric then form one trailing segment) or when no chord is left
/// (the rest of the lyric joins the last chord).
pub fn slice_columns(chord_line: &str, lyric_line: &str) -> Vec<AlignedSegment> {
    let chords: Vec<char> = chord_line.chars().collect();
    let lyric: Vec<char> = lyric_line.chars().collect();
    let mut segments = Vec::new();
    let mut start = 0;

    loop {
        let Some(end) = next_chord_position(&chords, start) else {
            segments.push(AlignedSegment::new(&slice(&chords, start, chords.len()), slice(&lyric, start, lyric.len())));
            break;
        };

        let lyric_part = slice(&lyric, start, end);
        if start > 0 && lyric_part.trim().is_empty() {
            segments.push(AlignedSegment::new(&slice(&chords, start, chords.len()), slice(&lyric, start, lyric.len())));
            break;
        }

        segments.push(AlignedSegment::new(&slice(&chords, start, end), lyric_part));
        start = end;
    }

    segments
}

/// Column of the chord after the one at `from`: skip the current token,
/// then the whitespace after it.
pub fn next_chord_position(line: &[char], from: usize) -> Option<usize> {
    if from + 1 >= line.len() {
        return None;
    }

    let after_token = line[from..]
        .iter()
        .position(|&c| is_blank(c))
        .map_or(line.len(), |offset| from + offset);

    line[after_token..]
        .iter()
        .position(|&c| !is_blank(c))
        .map(|offset| after_token + offset)
}

/// Whether the chord line is too long, relative to the lyric line, for
/// column alignment to make sense. Lengths are taken after trimming and
/// collapsing whitespace; an empty lyric always counts as too short.
pub fn looks_like_lyrics_too_short(chord_line: &str, lyric_line: &str, ratio_percent: usize) -> bool {
    let lyric_len = normalized_len(lyric_line);
    if lyric_len == 0 {
        return true;
    }
    let chord_len = normalized_len(chord_line);

    chord_len.saturating_mul(100) > ratio_percent.saturating_mul(lyric_len)
}

fn normalized_len(line: &str) -> usize {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }
    words.iter().map(|w| w.chars().count()).sum::<usize>() + words.len() - 1
}

fn slice(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

const fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

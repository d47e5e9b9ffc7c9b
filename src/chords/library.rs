//! Built-in chord shapes and the compact diagram code decoder.
//!
//! Most shapes are derived from a handful of open-position reference shapes
//! by [`GuitarChordDiagram::transpose_up_bar`]: `F` is the open `E` shape one
//! fret up under a barre, `H` is the open `A` shape two frets up.

use super::chord::ChordToken;
use super::diagram::GuitarChordDiagram;

/// Diagram codes that spell the library's own shape for a chord name.
///
/// A song declaring one of these as its variation gets the built-in diagram
/// (with finger numbers) instead of a decoded one.
pub const BUILT_IN_CODES: &[(&str, &str)] = &[
    ("A", "x02220"),
    ("B", "x13331"),
    ("C", "x32010"),
    ("D", "xx0232"),
    ("d", "xx0231"),
    ("E", "022100"),
    ("F", "133211"),
    ("G", "320003"),
    ("a", "x02210"),
    ("e", "022000"),
];

/// Chord names the library can draw, in display order.
pub const KNOWN_CHORDS: &[&str] = &[
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "B", "H", //
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "b", "h", //
    "C7", "C#7", "D7", "D#7", "E7", "F7", "F#7", "G7", "G#7", "A7", "B7", "H7", //
    "c7", "c#7", "d7", "d#7", "e7", "f7", "f#7", "g7", "g#7", "a7", "b7", "h7",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quality {
    Major,
    Minor,
    Seventh,
    MinorSeventh,
}

impl Quality {
    /// Quality of a parsed chord; `None` for suffixes the library has no shape for.
    fn of(token: &ChordToken) -> Option<Self> {
        let minor_suffix = matches!(token.suffix.as_str(), "m" | "min" | "m7" | "min7");
        let seventh = token.suffix.ends_with('7');
        let plain = matches!(token.suffix.as_str(), "" | "m" | "min" | "7" | "m7" | "min7");
        if !plain {
            return None;
        }

        Some(match (token.minor || minor_suffix, seventh) {
            (false, false) => Self::Major,
            (true, false) => Self::Minor,
            (false, true) => Self::Seventh,
            (true, true) => Self::MinorSeventh,
        })
    }
}

/// Library diagram for `name`.
///
/// A `variation` that is not one of [`BUILT_IN_CODES`] for this name means the
/// caller wants a different shape, so no standard diagram is returned.
pub fn standard_chord(name: &str, variation: Option<&str>) -> Option<GuitarChordDiagram> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if let Some(code) = variation {
        if !is_built_in_code(name, code) {
            return None;
        }
    }

    let token = ChordToken::parse(name)?;
    let quality = Quality::of(&token)?;
    shape(token.pitch_class, quality).map(|diagram| diagram.renamed(name))
}

/// Decode a compact diagram code.
///
/// Six characters, string 6 first: `x`/`X` mutes, `0` leaves the string open
/// and a hex digit frets it. A leading `#<hex>` adds a full barre at that fret;
/// under a barre `0` means the string is held by the barre. Anything else
/// yields `None`.
pub fn chord_by_ascii(name: &str, code: &str) -> Option<GuitarChordDiagram> {
    let code = code.trim();
    let (barre, body) = match code.strip_prefix('#') {
        Some(rest) => {
            let mut chars = rest.chars();
            let fret = hex_fret(chars.next()?)?;
            if fret == 0 {
                return None;
            }
            (Some(fret), chars.as_str())
        }
        None => (None, code),
    };

    if body.chars().count() != 6 {
        return None;
    }

    let mut diagram = GuitarChordDiagram::new(name.trim());
    for (string, c) in (1..=6u8).rev().zip(body.chars()) {
        match (c, barre) {
            ('x' | 'X', _) => diagram.set_muted(string),
            ('0', None) => diagram.set_open(string),
            ('0', Some(fret)) => diagram = diagram.with_tone(string, 1, fret),
            (c, _) => {
                let fret = hex_fret(c)?;
                diagram = diagram.with_tone(string, 0, fret);
            }
        }
    }

    if let Some(fret) = barre {
        diagram = diagram.with_barre(fret);
    }
    Some(diagram)
}

/// Diagram for `name`, honouring a song-specific `variation` code.
///
/// Built-in shapes win when no variation is given or the variation spells the
/// built-in shape; otherwise the code is decoded. A malformed code falls back
/// to the built-in shape.
pub fn resolve(name: &str, variation: Option<&str>) -> Option<GuitarChordDiagram> {
    standard_chord(name, variation)
        .or_else(|| variation.and_then(|code| chord_by_ascii(name, code)))
        .or_else(|| variation.and_then(|_| standard_chord(name, None)))
}

fn is_built_in_code(name: &str, code: &str) -> bool {
    let code = code.trim();
    BUILT_IN_CODES
        .iter()
        .any(|&(n, c)| n == name && c.eq_ignore_ascii_case(code))
}

fn hex_fret(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

fn barred(mut base: GuitarChordDiagram, frets: u8) -> GuitarChordDiagram {
    base.transpose_up_bar(frets);
    base
}

fn shape(pitch_class: usize, quality: Quality) -> Option<GuitarChordDiagram> {
    let diagram = match quality {
        Quality::Major => match pitch_class {
            0 => open_c(),
            1 => barred(open_a(), 4),
            2 => open_d(),
            3 => barred(open_a(), 6),
            4 => open_e(),
            5 => barred(open_e(), 1),
            6 => barred(open_e(), 2),
            7 => open_g(),
            8 => barred(open_e(), 4),
            9 => open_a(),
            10 => barred(open_a(), 1),
            11 => barred(open_a(), 2),
            _ => return None,
        },
        Quality::Minor => match pitch_class {
            0 => barred(open_am(), 3),
            1 => barred(open_am(), 4),
            2 => open_dm(),
            3 => barred(open_am(), 6),
            4 => open_em(),
            5 => barred(open_em(), 1),
            6 => barred(open_em(), 2),
            7 => barred(open_em(), 3),
            8 => barred(open_em(), 4),
            9 => open_am(),
            10 => barred(open_am(), 1),
            11 => barred(open_am(), 2),
            _ => return None,
        },
        Quality::Seventh => match pitch_class {
            0 => open_c7(),
            1 => barred(open_a7(), 4),
            2 => open_d7(),
            3 => barred(open_a7(), 6),
            4 => open_e7(),
            5 => barred(open_e7(), 1),
            6 => barred(open_e7(), 2),
            7 => open_g7(),
            8 => barred(open_e7(), 4),
            9 => open_a7(),
            10 => barred(open_a7(), 1),
            11 => open_h7(),
            _ => return None,
        },
        Quality::MinorSeventh => match pitch_class {
            0 => barred(open_am7(), 3),
            1 => barred(open_am7(), 4),
            2 => open_dm7(),
            3 => barred(open_am7(), 6),
            4 => open_em7(),
            5 => barred(open_em7(), 1),
            6 => barred(open_em7(), 2),
            7 => barred(open_em7(), 3),
            8 => barred(open_em7(), 4),
            9 => open_am7(),
            10 => barred(open_am7(), 1),
            11 => barred(open_am7(), 2),
            _ => return None,
        },
    };
    Some(diagram)
}

// Reference shapes: (string, finger, fret).

fn open_c() -> GuitarChordDiagram {
    GuitarChordDiagram::new("C")
        .with_tone(2, 1, 1)
        .with_tone(4, 2, 2)
        .with_tone(5, 3, 3)
        .with_open(&[1, 3])
        .with_muted(&[6])
}

fn open_d() -> GuitarChordDiagram {
    GuitarChordDiagram::new("D")
        .with_tone(1, 2, 2)
        .with_tone(2, 3, 3)
        .with_tone(3, 1, 2)
        .with_open(&[4])
        .with_muted(&[5, 6])
}

fn open_dm() -> GuitarChordDiagram {
    GuitarChordDiagram::new("d")
        .with_tone(1, 1, 1)
        .with_tone(2, 3, 3)
        .with_tone(3, 2, 2)
        .with_open(&[4])
        .with_muted(&[5, 6])
}

fn open_e() -> GuitarChordDiagram {
    GuitarChordDiagram::new("E")
        .with_tone(3, 1, 1)
        .with_tone(4, 3, 2)
        .with_tone(5, 2, 2)
        .with_open(&[1, 2, 6])
}

fn open_em() -> GuitarChordDiagram {
    GuitarChordDiagram::new("e")
        .with_tone(4, 3, 2)
        .with_tone(5, 2, 2)
        .with_open(&[1, 2, 3, 6])
}

fn open_g() -> GuitarChordDiagram {
    GuitarChordDiagram::new("G")
        .with_tone(1, 3, 3)
        .with_tone(5, 1, 2)
        .with_tone(6, 2, 3)
        .with_open(&[2, 3, 4])
}

fn open_a() -> GuitarChordDiagram {
    GuitarChordDiagram::new("A")
        .with_tone(2, 3, 2)
        .with_tone(3, 2, 2)
        .with_tone(4, 1, 2)
        .with_open(&[1, 5])
        .with_muted(&[6])
}

fn open_am() -> GuitarChordDiagram {
    GuitarChordDiagram::new("a")
        .with_tone(2, 1, 1)
        .with_tone(3, 3, 2)
        .with_tone(4, 2, 2)
        .with_open(&[1, 5])
        .with_muted(&[6])
}

fn open_a7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("A7")
        .with_tone(2, 3, 2)
        .with_tone(4, 2, 2)
        .with_open(&[1, 3, 5])
        .with_muted(&[6])
}

fn open_am7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("a7")
        .with_tone(2, 1, 1)
        .with_tone(4, 2, 2)
        .with_open(&[1, 3, 5])
        .with_muted(&[6])
}

fn open_c7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("C7")
        .with_tone(2, 1, 1)
        .with_tone(3, 4, 3)
        .with_tone(4, 2, 2)
        .with_tone(5, 3, 3)
        .with_open(&[1])
        .with_muted(&[6])
}

fn open_d7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("D7")
        .with_tone(1, 3, 2)
        .with_tone(2, 1, 1)
        .with_tone(3, 2, 2)
        .with_open(&[4])
        .with_muted(&[5, 6])
}

fn open_dm7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("d7")
        .with_tone(1, 1, 1)
        .with_tone(2, 1, 1)
        .with_tone(3, 2, 2)
        .with_open(&[4])
        .with_muted(&[5, 6])
}

fn open_e7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("E7")
        .with_tone(3, 1, 1)
        .with_tone(5, 2, 2)
        .with_open(&[1, 2, 4, 6])
}

fn open_em7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("e7")
        .with_tone(5, 2, 2)
        .with_open(&[1, 2, 3, 4, 6])
}

fn open_g7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("G7")
        .with_tone(1, 1, 1)
        .with_tone(5, 2, 2)
        .with_tone(6, 3, 3)
        .with_open(&[2, 3, 4])
}

fn open_h7() -> GuitarChordDiagram {
    GuitarChordDiagram::new("H7")
        .with_tone(1, 4, 2)
        .with_tone(3, 3, 2)
        .with_tone(4, 1, 1)
        .with_tone(5, 2, 2)
        .with_open(&[2])
        .with_muted(&[6])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use std::collections::BTreeSet;

    use super::*;

    fn tones(diagram: &GuitarChordDiagram) -> Vec<(u8, u8)> {
        let mut tones: Vec<(u8, u8)> = diagram
            .fretted()
            .filter_map(|t| t.string.map(|s| (s, t.fret)))
            .collect();
        tones.sort_unstable();
        tones
    }

    #[test]
    fn standard_c_shape() {
        let c = standard_chord("C", None).expect("C is built in");
        assert_eq!(tones(&c), vec![(2, 1), (4, 2), (5, 3)]);
        assert_eq!(c.open_strings(), &BTreeSet::from([1, 3]));
        assert_eq!(c.muted_strings(), &BTreeSet::from([6]));
        assert!(!c.has_barre());
    }

    #[test]
    fn barre_transposition_of_open_a_minor() {
        let mut a = standard_chord("a", None).unwrap();
        let before: Vec<(Option<u8>, u8, u8)> = a.tones.iter().map(|t| (t.string, t.finger, t.fret)).collect();

        a.transpose_up_bar(2);

        for ((string, finger, fret), tone) in before.iter().zip(a.fretted()) {
            assert_eq!(tone.string, *string);
            assert_eq!(tone.fret, fret + 2);
            assert_eq!(tone.finger, finger + 1);
        }
        let barre = a.barre().expect("barre added");
        assert_eq!(barre.fret, 2);
        assert!(a.muted_strings().is_empty());
        assert!(a.open_strings().is_empty());
    }

    #[test]
    fn f_is_the_e_shape_under_a_barre() {
        let f = standard_chord("F", None).unwrap();
        assert_eq!(f.name, "F");
        assert_eq!(tones(&f), vec![(3, 2), (4, 3), (5, 3)]);
        assert_eq!(f.barre().unwrap().fret, 1);
        assert_eq!(f.tone_at(4, 3).unwrap().finger, 4);
    }

    #[test]
    fn h_is_the_a_shape_two_frets_up() {
        let h = standard_chord("H", None).unwrap();
        assert_eq!(tones(&h), vec![(2, 4), (3, 4), (4, 4)]);
        assert_eq!(h.barre().unwrap().fret, 2);
    }

    #[test]
    fn spellings_resolve_to_the_same_shape() {
        let minor = standard_chord("Am", None).unwrap();
        let lower = standard_chord("a", None).unwrap();
        assert_eq!(minor.name, "Am");
        assert_eq!(minor.tones, lower.tones);

        let polish = standard_chord("Fis", None).unwrap();
        let sharp = standard_chord("F#", None).unwrap();
        let flat = standard_chord("Gb", None).unwrap();
        assert_eq!(polish.tones, sharp.tones);
        assert_eq!(flat.tones, sharp.tones);
    }

    #[test]
    fn every_known_chord_has_a_shape() {
        for name in KNOWN_CHORDS {
            let diagram = standard_chord(name, None).unwrap_or_else(|| panic!("{name} missing"));
            assert!(!diagram.tones.is_empty(), "{name} has no tones");
            assert!(diagram.start_fret(4) >= 1);
        }
    }

    #[test]
    fn unknown_names_have_no_shape() {
        assert!(standard_chord("", None).is_none());
        assert!(standard_chord("Hello", None).is_none());
        assert!(standard_chord("Csus4", None).is_none());
    }

    #[test]
    fn foreign_variation_hides_standard_shape() {
        assert!(standard_chord("C", Some("x35553")).is_none());
        assert!(standard_chord("C", Some("x32010")).is_some());
    }

    #[test]
    fn decodes_plain_code() {
        let c = chord_by_ascii("C", "x32010").unwrap();
        assert_eq!(tones(&c), vec![(2, 1), (4, 2), (5, 3)]);
        assert_eq!(c.open_strings(), &BTreeSet::from([1, 3]));
        assert_eq!(c.muted_strings(), &BTreeSet::from([6]));
    }

    #[test]
    fn decodes_barre_prefix() {
        let f = chord_by_ascii("F", "#1033200").unwrap();
        assert_eq!(f.barre().unwrap().fret, 1);
        assert_eq!(tones(&f), vec![(1, 1), (2, 1), (3, 2), (4, 3), (5, 3), (6, 1)]);
        assert!(f.open_strings().is_empty());
    }

    #[test]
    fn decodes_hex_frets() {
        let high = chord_by_ascii("X", "xxa9bc").unwrap();
        assert_eq!(tones(&high), vec![(1, 12), (2, 11), (3, 9), (4, 10)]);
    }

    #[test]
    fn malformed_codes_yield_nothing() {
        for code in ["", "x3201", "x320100", "x32z10", "#", "#g032010", "#0x32010"] {
            assert!(chord_by_ascii("C", code).is_none(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn resolve_prefers_built_in_then_variation() {
        let standard = resolve("C", None).unwrap();
        assert_eq!(standard, standard_chord("C", None).unwrap());

        let matching = resolve("C", Some("X32010")).unwrap();
        assert_eq!(matching.tone_at(2, 1).unwrap().finger, 1);

        let custom = resolve("C", Some("x35553")).unwrap();
        assert_eq!(tones(&custom), vec![(1, 3), (2, 5), (3, 5), (4, 5), (5, 3)]);

        let broken = resolve("C", Some("nonsense")).unwrap();
        assert_eq!(broken, standard);

        assert!(resolve("Cadd9", None).is_none());
        assert!(resolve("Cadd9", Some("x32030")).is_some());
    }
}

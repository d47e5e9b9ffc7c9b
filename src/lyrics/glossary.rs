//! Chord diagram list appended after the lyrics.

use std::fmt::Write as _;

use tracing::debug;

use crate::chords::{is_chord, resolve, GuitarChordDiagram};
use crate::html::escape;
use crate::types::DiagramStyle;

/// A chord with the diagram drawn for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Chord name as written in the song.
    pub name: String,
    /// Song-specific diagram code, if the song declared one.
    pub variation: Option<String>,
    /// Resolved diagram.
    pub diagram: GuitarChordDiagram,
}

/// Parse a `chords_variations` field: `Name:code,Name2=code2`.
///
/// Entries without a separator, with an empty side, or whose name is not a
/// chord are skipped. The first declaration of a name wins.
pub fn parse_variations(text: &str) -> Vec<(String, String)> {
    let mut variations: Vec<(String, String)> = Vec::new();

    for entry in text.split(',').filter(|e| !e.trim().is_empty()) {
        let Some((name, code)) = entry.split_once([':', '=']) else {
            debug!("Ignoring chord variation without separator: {entry:?}");
            continue;
        };
        let (name, code) = (name.trim(), code.trim());
        if name.is_empty() || code.is_empty() || !is_chord(name) {
            debug!("Ignoring malformed chord variation: {entry:?}");
            continue;
        }
        if variations.iter().any(|(n, _)| n == name) {
            continue;
        }
        variations.push((name.to_string(), code.to_string()));
    }

    variations
}

/// Resolve chords and declared variations into diagrams.
///
/// Chords come first in order of appearance, then variation names not used
/// in the lyrics. With `custom_only`, only declared variations are listed.
/// Names without any diagram are left out.
pub fn build_glossary(chords: &[String], variations: &[(String, String)], custom_only: bool) -> Vec<GlossaryEntry> {
    let mut names: Vec<&str> = Vec::new();
    if !custom_only {
        names.extend(chords.iter().map(String::as_str));
    }
    for (name, _) in variations {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }

    names
        .into_iter()
        .filter_map(|name| {
            let variation = variations.iter().find(|(n, _)| n == name).map(|(_, code)| code.clone());
            let Some(diagram) = resolve(name, variation.as_deref()) else {
                debug!("No diagram for chord {name:?}");
                return None;
            };
            Some(GlossaryEntry {
                name: name.to_string(),
                variation,
                diagram,
            })
        })
        .collect()
}

/// HTML list of diagrams; empty when there is nothing to show.
pub fn glossary_html(entries: &[GlossaryEntry], style: DiagramStyle, color: Option<&str>) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"chord-diagrams\">\n");
    for entry in entries {
        let drawing = entry.diagram.render(style, color);
        if style.is_svg() {
            let _ = writeln!(html, "<div class=\"chord-diagram\">{drawing}</div>");
        } else {
            let _ = writeln!(html, "<div class=\"chord-diagram\"><pre>{}</pre></div>", escape(&drawing));
        }
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_both_separators() {
        let parsed = parse_variations("C:x32010, a=x02210 ,, Hello:x00000, G:, D#:#6x1333");
        assert_eq!(
            parsed,
            vec![
                ("C".to_string(), "x32010".to_string()),
                ("a".to_string(), "x02210".to_string()),
                ("D#".to_string(), "#6x1333".to_string()),
            ]
        );
    }

    #[test]
    fn first_declaration_wins() {
        let parsed = parse_variations("C:x32010,C:x35553");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].1, "x32010");
    }

    #[test]
    fn glossary_lists_chords_then_extra_variations() {
        let variations = parse_variations("Cadd9:x32030");
        let entries = build_glossary(&owned(&["G", "C", "Xyz"]), &variations, false);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["G", "C", "Cadd9"]);
        assert_eq!(entries[2].variation.as_deref(), Some("x32030"));
    }

    #[test]
    fn custom_only_lists_declared_variations() {
        let variations = parse_variations("G:320033");
        let entries = build_glossary(&owned(&["C", "G"]), &variations, true);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "G");
        assert!(entries[0].diagram.tone_at(2, 3).is_some());
    }

    #[test]
    fn unknown_chords_are_omitted() {
        assert!(build_glossary(&owned(&["Csus4"]), &[], false).is_empty());
        assert_eq!(glossary_html(&[], DiagramStyle::Svg, None), "");
    }

    #[test]
    fn html_wraps_each_diagram() {
        let entries = build_glossary(&owned(&["C", "G"]), &[], false);
        let svg = glossary_html(&entries, DiagramStyle::Svg, None);
        assert_eq!(svg.matches("class=\"chord-diagram\"").count(), 2);
        assert_eq!(svg.matches("<svg").count(), 2);

        let ascii = glossary_html(&entries, DiagramStyle::Ascii, None);
        assert_eq!(ascii.matches("<pre>").count(), 2);
    }
}

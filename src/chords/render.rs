//! Text and SVG drawings of chord diagrams.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use super::diagram::{BarreSpan, GuitarChordDiagram, StringState};
use crate::constants::chords::STRING_COUNT;
use crate::constants::diagram::{CIRCLE_RADIUS, DEFAULT_FILL, FRET_WINDOW, SVG_HORIZONTAL_SIZE, SVG_VERTICAL_SIZE};
use crate::html::escape;
use crate::types::DiagramStyle;

/// Width of the vertical ASCII grid, used to center the chord name.
const VERTICAL_GRID_WIDTH: usize = 12;

impl GuitarChordDiagram {
    /// Render in the requested style with default sizes.
    pub fn render(&self, style: DiagramStyle, color: Option<&str>) -> String {
        match style {
            DiagramStyle::Svg => {
                let (width, height) = SVG_VERTICAL_SIZE;
                self.to_svg(width, height, color)
            }
            DiagramStyle::SvgHorizontal => {
                let (width, height) = SVG_HORIZONTAL_SIZE;
                self.to_svg_horizontal(width, height, color)
            }
            DiagramStyle::Ascii => self.to_ascii(FRET_WINDOW),
            DiagramStyle::AsciiVertical => self.to_ascii_vertical(FRET_WINDOW),
        }
    }

    /// Horizontal text diagram: string 1 on top, frets running right.
    ///
    /// ```text
    /// C
    /// o ||---|---|---|---|
    ///   ||-1-|---|---|---|
    /// ```
    pub fn to_ascii(&self, window: u8) -> String {
        let start = self.start_fret(window);
        let span = self.barre_span();
        let mut out = String::new();

        if !self.name.is_empty() {
            let _ = writeln!(out, "{}", self.name);
        }

        for string in 1..=STRING_COUNT {
            out.push_str(ascii_marker(self.string_state(string)));
            if start == 1 {
                out.push_str("||");
            } else {
                let _ = write!(out, "{start:>2}");
            }

            for fret in fret_range(start, window) {
                let cell = self.ascii_cell(string, fret, span, '-');
                let _ = write!(out, "-{cell}-|");
            }
            out.push('\n');
        }

        out
    }

    /// Vertical text diagram: string 6 on the left, nut on top.
    pub fn to_ascii_vertical(&self, window: u8) -> String {
        let start = self.start_fret(window);
        let span = self.barre_span();
        let mut out = String::new();

        if !self.name.is_empty() {
            let pad = VERTICAL_GRID_WIDTH.saturating_sub(self.name.width()) / 2;
            let _ = writeln!(out, "{}{}", " ".repeat(pad + 1), self.name);
        }

        out.push_str("  ");
        for string in (1..=STRING_COUNT).rev() {
            out.push_str(ascii_marker(self.string_state(string)));
        }
        out.push('\n');

        if start == 1 {
            out.push_str("  ============\n");
        } else {
            let _ = writeln!(out, "{start:>2}------------");
        }

        for fret in fret_range(start, window) {
            out.push_str("  ");
            for string in (1..=STRING_COUNT).rev() {
                let cell = self.ascii_cell(string, fret, span, '|');
                let _ = write!(out, "{cell} ");
            }
            out.push_str("\n  -----------\n");
        }

        out
    }

    /// Vertical SVG diagram (string 6 on the left).
    pub fn to_svg(&self, width: i32, height: i32, color: Option<&str>) -> String {
        let fill = color.unwrap_or(DEFAULT_FILL);
        let (top, left, right, bottom) = (25, 15, 10, 10);
        let grid_width = width - left - right;
        let grid_height = height - top - bottom;
        let frets = i32::from(FRET_WINDOW);
        let string_spacing = grid_width / 5;
        let fret_spacing = grid_height / frets;
        let start = self.start_fret(FRET_WINDOW);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        self.svg_title(&mut svg, width);

        if start == 1 {
            let _ = writeln!(svg, r#"  <rect x="{left}" y="{top}" width="{grid_width}" height="3" fill="{fill}"/>"#);
        } else {
            let y = top + fret_spacing / 2 + 4;
            let _ = writeln!(svg, r#"  <text x="3" y="{y}" font-family="Arial" font-size="10">{start}</text>"#);
        }

        for i in 0..=frets {
            let y = top + i * fret_spacing;
            svg_line(&mut svg, (left, y), (left + grid_width, y));
        }
        for i in 0..i32::from(STRING_COUNT) {
            let x = left + i * string_spacing;
            svg_line(&mut svg, (x, top), (x, top + grid_height));
        }

        let column = |string: u8| left + (i32::from(STRING_COUNT) - i32::from(string)) * string_spacing;
        let row = |fret: u8| top + (i32::from(fret) - i32::from(start)) * fret_spacing + fret_spacing / 2;

        if let Some(span) = self.barre_span() {
            let r = CIRCLE_RADIUS - 2;
            let (x1, x2) = (column(span.high), column(span.low));
            let y = row(span.fret);
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{r}" fill="{fill}"/>"#,
                x1 - r,
                y - r,
                x2 - x1 + r * 2,
                r * 2
            );
        }

        for tone in self.fretted().filter(|t| t.fret > 0) {
            let Some(string) = tone.string else { continue };
            svg_dot(&mut svg, column(string), row(tone.fret), tone.finger, fill);
        }

        for string in 1..=STRING_COUNT {
            if let Some(glyph) = svg_marker(self.string_state(string)) {
                svg_glyph(&mut svg, column(string), top - 5, glyph);
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Horizontal SVG diagram (string 1 on top, lowest fret on the left).
    pub fn to_svg_horizontal(&self, width: i32, height: i32, color: Option<&str>) -> String {
        let fill = color.unwrap_or(DEFAULT_FILL);
        let (top, left, right, bottom) = (20, 7, 5, 15);
        let grid_width = width - left - right;
        let grid_height = height - top - bottom;
        let frets = i32::from(FRET_WINDOW);
        let fret_spacing = grid_width / frets;
        let string_spacing = grid_height / 5;
        let start = self.start_fret(FRET_WINDOW);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" fill="#777">"##
        );
        self.svg_title(&mut svg, width);

        if start == 1 {
            let _ = writeln!(svg, r#"  <rect x="{left}" y="{top}" width="3" height="{grid_height}" fill="{fill}"/>"#);
        } else {
            let x = left + fret_spacing / 2;
            let y = top - 5;
            let _ = writeln!(
                svg,
                r#"  <text x="{x}" y="{y}" text-anchor="middle" font-family="Arial" font-size="10">{start}</text>"#
            );
        }

        for i in 0..=frets {
            let x = left + i * fret_spacing;
            svg_line(&mut svg, (x, top), (x, top + grid_height));
        }
        for i in 0..i32::from(STRING_COUNT) {
            let y = top + i * string_spacing;
            svg_line(&mut svg, (left, y), (left + grid_width, y));
        }

        let row = |string: u8| top + (i32::from(string) - 1) * string_spacing;
        let column = |fret: u8| left + (i32::from(fret) - i32::from(start)) * fret_spacing + fret_spacing / 2;

        if let Some(span) = self.barre_span() {
            let r = CIRCLE_RADIUS - 2;
            let (y1, y2) = (row(span.low), row(span.high));
            let x = column(span.fret);
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{r}" fill="{fill}"/>"#,
                x - r,
                y1 - r,
                r * 2,
                y2 - y1 + r * 2
            );
        }

        for tone in self.fretted().filter(|t| t.fret > 0) {
            let Some(string) = tone.string else { continue };
            svg_dot(&mut svg, column(tone.fret), row(string), tone.finger, fill);
        }

        for string in 1..=STRING_COUNT {
            if let Some(glyph) = svg_marker(self.string_state(string)) {
                svg_glyph(&mut svg, left - 5, row(string) + 3, glyph);
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn svg_title(&self, svg: &mut String, width: i32) {
        if self.name.is_empty() {
            return;
        }
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="12" text-anchor="middle" font-family="Arial" font-size="12" font-weight="bold">{}</text>"#,
            width / 2,
            escape(&self.name)
        );
    }

    fn ascii_cell(&self, string: u8, fret: u8, span: Option<BarreSpan>, blank: char) -> String {
        match self.tone_at(string, fret) {
            Some(tone) if tone.finger > 0 => tone.finger.to_string(),
            Some(_) => "●".to_string(),
            None if span.is_some_and(|s| s.covers(string, fret)) => "■".to_string(),
            None => blank.to_string(),
        }
    }
}

fn fret_range(start: u8, window: u8) -> impl Iterator<Item = u8> {
    (0..window).map(move |offset| start.saturating_add(offset))
}

const fn ascii_marker(state: StringState) -> &'static str {
    match state {
        StringState::Muted => "x ",
        StringState::Open => "o ",
        StringState::Fretted | StringState::Undecorated => "  ",
    }
}

const fn svg_marker(state: StringState) -> Option<&'static str> {
    match state {
        StringState::Muted => Some("×"),
        StringState::Open => Some("○"),
        StringState::Fretted | StringState::Undecorated => None,
    }
}

fn svg_line(svg: &mut String, (x1, y1): (i32, i32), (x2, y2): (i32, i32)) {
    let _ = writeln!(
        svg,
        r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="black" stroke-width="1"/>"#
    );
}

fn svg_dot(svg: &mut String, x: i32, y: i32, finger: u8, fill: &str) {
    let _ = writeln!(svg, r#"  <circle cx="{x}" cy="{y}" r="{CIRCLE_RADIUS}" fill="{fill}"/>"#);
    if finger > 0 {
        let _ = writeln!(
            svg,
            r#"  <text x="{x}" y="{}" text-anchor="middle" font-family="Arial" font-size="8" fill="white">{finger}</text>"#,
            y + 3
        );
    }
}

fn svg_glyph(svg: &mut String, x: i32, y: i32, glyph: &str) {
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}" text-anchor="middle" font-family="Arial" font-size="10">{glyph}</text>"#
    );
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn open_c() -> GuitarChordDiagram {
        GuitarChordDiagram::new("C")
            .with_tone(2, 1, 1)
            .with_tone(4, 2, 2)
            .with_tone(5, 3, 3)
            .with_open(&[1, 3])
            .with_muted(&[6])
    }

    #[test]
    fn ascii_horizontal_open_c() {
        let expected = "C\n\
                        o ||---|---|---|---|\n\
                        \x20 ||-1-|---|---|---|\n\
                        o ||---|---|---|---|\n\
                        \x20 ||---|-2-|---|---|\n\
                        \x20 ||---|---|-3-|---|\n\
                        x ||---|---|---|---|\n";
        assert_eq!(open_c().to_ascii(4), expected);
    }

    #[test]
    fn ascii_horizontal_moveable_shape_prints_start_fret() {
        let chord = GuitarChordDiagram::new("X")
            .with_tone(2, 3, 7)
            .with_tone(3, 2, 6);
        let text = chord.to_ascii(4);
        let first_string = text.lines().nth(1).unwrap();
        assert!(first_string.starts_with("   6"), "{first_string}");
    }

    #[test]
    fn ascii_shows_barre_cells() {
        let chord = GuitarChordDiagram::new("F")
            .with_tone(3, 2, 2)
            .with_barre(1);
        let text = chord.to_ascii(4);
        assert_eq!(text.matches('■').count(), 6);
        assert!(text.contains("-2-|"));
    }

    #[test]
    fn ascii_vertical_layout() {
        let text = open_c().to_ascii_vertical(4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].trim(), "C");
        assert_eq!(lines[1], "  x     o   o ");
        assert_eq!(lines[2], "  ============");
        assert_eq!(lines[3], "  | | | | 1 | ");
        assert_eq!(lines[4], "  -----------");
    }

    #[test]
    fn svg_contains_grid_dots_and_glyphs() {
        let svg = open_c().to_svg(80, 100, None);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 5 + 6);
        assert_eq!(svg.matches('×').count(), 1);
        assert_eq!(svg.matches('○').count(), 2);
        assert!(svg.contains(r#"height="3" fill="black""#));
    }

    #[test]
    fn svg_uses_custom_color_and_escapes_name() {
        let chord = GuitarChordDiagram::new("A<b>").with_tone(1, 1, 1);
        let svg = chord.to_svg(80, 100, Some("#c00"));
        assert!(svg.contains(r##"fill="#c00""##));
        assert!(svg.contains("A&lt;b&gt;"));
    }

    #[test]
    fn svg_draws_barre_as_rounded_rect() {
        let chord = GuitarChordDiagram::new("F").with_tone(3, 2, 2).with_barre(1);
        let svg = chord.to_svg_horizontal(100, 80, None);
        assert!(svg.contains(r#"rx="4""#));
        assert!(svg.contains(r##"fill="#777""##));
    }

    #[test]
    fn render_dispatches_on_style() {
        let chord = open_c();
        assert!(chord.render(DiagramStyle::Svg, None).starts_with("<svg"));
        assert!(chord.render(DiagramStyle::SvgHorizontal, None).starts_with("<svg"));
        assert!(chord.render(DiagramStyle::Ascii, None).starts_with("C\n"));
        assert!(chord.render(DiagramStyle::AsciiVertical, None).contains("===="));
    }
}

//! Debug tool to print diagrams of the built-in chord library.
//!
//! Usage:
//!   `cargo run --bin chord_diagram`
//!   `cargo run --bin chord_diagram -- --vertical`
//!   `cargo run --bin chord_diagram -- C a H7`

use anyhow::{Context, Result};
use songbook::chords::library::KNOWN_CHORDS;
use songbook::chords::standard_chord;
use songbook::constants::diagram::FRET_WINDOW;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let vertical = args.iter().any(|a| a == "--vertical");
    let requested: Vec<&str> = args.iter().map(String::as_str).filter(|a| !a.starts_with("--")).collect();

    let names = if requested.is_empty() { KNOWN_CHORDS.to_vec() } else { requested };
    for name in names {
        let diagram = standard_chord(name, None).with_context(|| format!("no library shape for {name:?}"))?;
        let drawing = if vertical {
            diagram.to_ascii_vertical(FRET_WINDOW)
        } else {
            diagram.to_ascii(FRET_WINDOW)
        };
        println!("{name}");
        println!("{drawing}");
        println!();
    }
    Ok(())
}

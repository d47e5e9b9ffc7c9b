//! Lyrics processing: section detection, chord alignment and rendering.

pub mod align;
pub mod analysis;
pub mod block;
pub mod glossary;
pub mod render;

pub use analysis::SongAnalysis;
pub use block::{recognize_block_type, tabulatura_succeeding_lines, LyricLine};
pub use glossary::{parse_variations, GlossaryEntry};
pub use render::{render, render_preformatted, Block, LyricsRenderer, Node, RenderContext, RenderOptions, RenderedLine, RenderedLyrics};

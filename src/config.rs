//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

use crate::constants::render::{DEFAULT_LYRICS_RATIO_PERCENT, MAX_LYRICS_RATIO_PERCENT};
use crate::error::{Error, Result};
use crate::html::FontFace;
use crate::lyrics::RenderOptions;
use crate::types::DiagramStyle;

/// Configuration for rendering songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Chord line length, in percent of the lyric, above which alignment is skipped
    pub lyrics_ratio_percent: usize,
    /// How chord diagrams are drawn
    pub diagram_style: DiagramStyle,
    /// Fill colour of diagram dots and bars
    pub diagram_color: Option<String>,
    /// Drop tablature blocks
    pub skip_tabulatures: bool,
    /// Render lyrics without any chords
    pub skip_lyric_chords: bool,
    /// List only the song's declared chord shapes under the lyrics
    pub custom_chords_only: bool,
    /// Fonts embedded in HTML pages
    pub fonts: Vec<FontFace>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_ratio_percent: DEFAULT_LYRICS_RATIO_PERCENT,
            diagram_style: DiagramStyle::default(),
            diagram_color: None,
            skip_tabulatures: false,
            skip_lyric_chords: false,
            custom_chords_only: false,
            fonts: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(ratio) = lookup("SONGBOOK_LYRICS_RATIO") {
            config.lyrics_ratio_percent = ratio
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|r| (1..=MAX_LYRICS_RATIO_PERCENT).contains(r))
                .ok_or_else(|| {
                    Error::config(
                        format!("invalid SONGBOOK_LYRICS_RATIO {ratio:?}"),
                        "Use a whole percentage between 1 and 1000",
                    )
                })?;
        }

        if let Some(style) = lookup("SONGBOOK_DIAGRAM_STYLE") {
            config.diagram_style = DiagramStyle::from_name(&style).ok_or_else(|| {
                Error::config(
                    format!("unknown SONGBOOK_DIAGRAM_STYLE {style:?}"),
                    "Use svg, svg-horizontal, ascii or ascii-vertical",
                )
            })?;
        }

        config.diagram_color = lookup("SONGBOOK_DIAGRAM_COLOR")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if let Some(skip) = lookup("SONGBOOK_SKIP_TABS") {
            config.skip_tabulatures = is_enabled(&skip);
        }
        if let Some(skip) = lookup("SONGBOOK_SKIP_CHORDS") {
            config.skip_lyric_chords = is_enabled(&skip);
        }
        if let Some(custom) = lookup("SONGBOOK_CUSTOM_CHORDS_ONLY") {
            config.custom_chords_only = is_enabled(&custom);
        }

        if let Some(fonts) = lookup("SONGBOOK_FONTS") {
            config.fonts = parse_fonts(&fonts)?;
        }

        Ok(config)
    }

    /// Rendering options for this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            lyrics_ratio_percent: self.lyrics_ratio_percent,
            skip_tabulatures: self.skip_tabulatures,
            skip_lyric_chords: self.skip_lyric_chords,
            custom_chords_only: self.custom_chords_only,
            diagram_style: self.diagram_style,
            diagram_color: self.diagram_color.clone(),
            ..RenderOptions::default()
        }
    }
}

/// `1`, `true` or `yes`, in any case.
fn is_enabled(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Parse `Family=path;Family2=path`, expanding `~` in paths.
fn parse_fonts(text: &str) -> Result<Vec<FontFace>> {
    text.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (family, path) = entry
                .split_once('=')
                .map(|(f, p)| (f.trim(), p.trim()))
                .filter(|(f, p)| !f.is_empty() && !p.is_empty())
                .ok_or_else(|| {
                    Error::config(
                        format!("invalid SONGBOOK_FONTS entry {entry:?}"),
                        "Write fonts as Family=path;Family2=path",
                    )
                })?;
            Ok(FontFace::new(family, PathBuf::from(shellexpand::tilde(path).to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lyrics_ratio_percent, 50);
        assert_eq!(config.app_name(), "songbook");
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("SONGBOOK_LYRICS_RATIO", "80"),
            ("SONGBOOK_DIAGRAM_STYLE", "ascii-vertical"),
            ("SONGBOOK_DIAGRAM_COLOR", "#333"),
            ("SONGBOOK_SKIP_TABS", "true"),
            ("SONGBOOK_SKIP_CHORDS", "yes"),
            ("SONGBOOK_CUSTOM_CHORDS_ONLY", "1"),
            ("SONGBOOK_FONTS", "Roboto=/fonts/roboto.ttf; Mono=/fonts/mono.ttf"),
        ])
        .unwrap();

        let options = config.render_options();
        assert_eq!(options.lyrics_ratio_percent, 80);
        assert_eq!(options.diagram_style, DiagramStyle::AsciiVertical);
        assert_eq!(options.diagram_color.as_deref(), Some("#333"));
        assert!(options.skip_tabulatures);
        assert!(options.skip_lyric_chords);
        assert!(options.custom_chords_only);
        assert_eq!(config.fonts.len(), 2);
        assert_eq!(config.fonts[1], FontFace::new("Mono", "/fonts/mono.ttf"));
    }

    #[test]
    fn rejects_ratio_out_of_range() {
        for bad in ["0", "1001", "abc", "-5"] {
            let err = config(&[("SONGBOOK_LYRICS_RATIO", bad)]).unwrap_err();
            assert!(matches!(err, Error::Config { .. }), "{bad} should be rejected");
        }
        assert!(config(&[("SONGBOOK_LYRICS_RATIO", "1000")]).is_ok());
    }

    #[test]
    fn switches_stay_off_unless_enabled() {
        let config = config(&[("SONGBOOK_SKIP_CHORDS", "no"), ("SONGBOOK_CUSTOM_CHORDS_ONLY", "")]).unwrap();
        assert!(!config.skip_lyric_chords);
        assert!(!config.custom_chords_only);
    }

    #[test]
    fn rejects_unknown_style_and_bad_fonts() {
        assert!(config(&[("SONGBOOK_DIAGRAM_STYLE", "png")]).is_err());
        assert!(config(&[("SONGBOOK_FONTS", "Roboto")]).is_err());
    }
}

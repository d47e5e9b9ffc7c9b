//! Rendering a whole directory of songs into HTML pages.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::html::{lyrics_document, DocumentOptions};
use crate::song::Song;

/// Extensions picked up as song files.
const SONG_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Pages written.
    pub written: Vec<PathBuf>,
    /// Songs that failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

/// Song files under `dir`, sorted by path.
pub fn find_songs(dir: &Path) -> Vec<PathBuf> {
    let mut songs: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SONG_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    songs.sort();
    songs
}

/// Render every song under `input` in parallel. Each page keeps the song's
/// path relative to `input`, so `a/song.txt` becomes `output/a/song.html`.
/// Songs that would land on the same page (`x.txt` next to `x.json`) are
/// all reported as failed and none of them is written.
pub fn render_directory(input: &Path, output: &Path, options: &DocumentOptions) -> Result<BatchReport> {
    fs_err::create_dir_all(output).map_err(|e| Error::io(e, output.to_path_buf()))?;

    let start = Instant::now();
    let mut report = BatchReport::default();
    let mut jobs: Vec<(PathBuf, PathBuf)> = Vec::new();
    let mut claimed: HashMap<PathBuf, usize> = HashMap::new();
    for path in find_songs(input) {
        match page_path(&path, input, output) {
            Ok(page) => {
                *claimed.entry(page.clone()).or_default() += 1;
                jobs.push((path, page));
            }
            Err(e) => report.failed.push((path, e.to_string())),
        }
    }

    let (jobs, clashes): (Vec<_>, Vec<_>) = jobs.into_iter().partition(|(_, page)| claimed.get(page) == Some(&1));
    for (path, page) in clashes {
        report
            .failed
            .push((path, format!("another song is also rendered to {}", page.display())));
    }

    let results: Vec<(PathBuf, Result<PathBuf>)> = jobs
        .into_par_iter()
        .map(|(path, page)| {
            let result = render_file(&path, page, options);
            (path, result)
        })
        .collect();

    for (path, result) in results {
        match result {
            Ok(page) => report.written.push(page),
            Err(e) => report.failed.push((path, e.to_string())),
        }
    }
    report.written.sort();
    report.failed.sort();
    for (path, reason) in &report.failed {
        tracing::warn!("Skipping {}: {reason}", path.display());
    }

    let elapsed = start.elapsed();
    tracing::info!(
        "Rendered {} songs ({} failed) in {elapsed:?}",
        report.written.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Page for a song: its path below `input`, moved under `output` with an
/// `.html` extension.
fn page_path(path: &Path, input: &Path, output: &Path) -> Result<PathBuf> {
    let relative = path.strip_prefix(input).unwrap_or(path);
    if relative.file_stem().and_then(|s| s.to_str()).is_none() {
        return Err(Error::parse("file name is not valid UTF-8", path.to_path_buf()));
    }
    Ok(output.join(relative).with_extension("html"))
}

fn render_file(path: &Path, page: PathBuf, options: &DocumentOptions) -> Result<PathBuf> {
    let song = Song::from_file(path)?;
    if let Some(dir) = page.parent() {
        fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
    }
    fs_err::write(&page, lyrics_document(&song, options)).map_err(|e| Error::io(e, page.clone()))?;
    Ok(page)
}

//! Pipeline module: drives each audio file through inspect, locate and
//! fetch, one file at a time.
//!
//! Every per-file failure is logged and recorded as that file's outcome;
//! only a missing root directory stops a run.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::artwork::{ArtError, ArtInspector, Fetcher, HttpClient, Locator};
use crate::config::Settings;
use crate::library::{AudioTrack, ScanError, walk};

/// Where a failed file gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Search => f.write_str("search"),
            Stage::Save => f.write_str("save"),
        }
    }
}

/// Terminal outcome for one audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    AlreadyHasArt,
    NoArtFound,
    ArtSaved { path: PathBuf },
    Failed { stage: Stage, reason: String },
}

/// A file that ended without a cover because of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub path: PathBuf,
    pub stage: Stage,
    pub reason: String,
}

/// What one run did: counters plus the covers written and the failures.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub already_had_art: usize,
    pub not_found: usize,
    pub covers: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn record(&mut self, source: &Path, outcome: FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::AlreadyHasArt => self.already_had_art += 1,
            FileOutcome::NoArtFound => self.not_found += 1,
            FileOutcome::ArtSaved { path } => self.covers.push(path),
            FileOutcome::Failed { stage, reason } => self.failures.push(Failure {
                path: source.to_path_buf(),
                stage,
                reason,
            }),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files scanned: {} already had art, {} covers saved, {} not found, {} failed",
            self.scanned,
            self.already_had_art,
            self.covers.len(),
            self.not_found,
            self.failures.len()
        )
    }
}

pub struct Pipeline<'a, I, H> {
    inspector: &'a I,
    locator: Locator<'a, H>,
    fetcher: Fetcher<'a, H>,
}

impl<'a, I: ArtInspector, H: HttpClient> Pipeline<'a, I, H> {
    pub fn new(inspector: &'a I, http: &'a H, settings: &'a Settings) -> Self {
        Self {
            inspector,
            locator: Locator::new(http, &settings.lookup),
            fetcher: Fetcher::new(http, &settings.output.cover_file_name),
        }
    }

    /// Run one file through the stages and report where it ended up.
    pub fn process(&self, track: &AudioTrack) -> FileOutcome {
        let path = track.path.as_path();
        let name = track.search_term.as_str();

        let has_art = match self.inspector.has_embedded_art(path) {
            Ok(has_art) => has_art,
            Err(err) => {
                // Unreadable tags count as "no art".
                warn!("Error checking album art for {}: {err}", path.display());
                false
            }
        };
        if has_art {
            debug!("Album art already embedded: {}", path.display());
            return FileOutcome::AlreadyHasArt;
        }

        info!("Fetching album art for: {name}");
        let url = match self.locator.find_artwork(name) {
            Ok(Some(url)) => url,
            Ok(None) => {
                info!("No album art found for: {name}");
                return FileOutcome::NoArtFound;
            }
            Err(err) => return failed(Stage::Search, path, err),
        };

        match self.fetcher.save_cover(path, &url) {
            Ok(written) => {
                info!("Album art saved to {}", written.display());
                info!("Album art updated for: {name}");
                FileOutcome::ArtSaved { path: written }
            }
            Err(err) => failed(Stage::Save, path, err),
        }
    }

    /// Process every track in order, fully finishing each before the next.
    pub fn run(&self, tracks: impl IntoIterator<Item = AudioTrack>) -> RunSummary {
        let mut summary = RunSummary::default();
        for track in tracks {
            let outcome = self.process(&track);
            summary.record(&track.path, outcome);
        }
        summary
    }
}

fn failed(stage: Stage, path: &Path, err: ArtError) -> FileOutcome {
    let verb = match stage {
        Stage::Search => "searching for",
        Stage::Save => "setting",
    };
    warn!("Error {verb} album art for {}: {err}", path.display());
    FileOutcome::Failed {
        stage,
        reason: err.to_string(),
    }
}

/// Walk `root` and run every audio file below it through the pipeline.
///
/// Nothing is inspected or requested when `root` is missing.
pub fn scan_and_fetch<I: ArtInspector, H: HttpClient>(
    root: &Path,
    settings: &Settings,
    inspector: &I,
    http: &H,
) -> Result<RunSummary, ScanError> {
    let tracks = walk(root, &settings.library)?;
    let pipeline = Pipeline::new(inspector, http, settings);
    Ok(pipeline.run(tracks))
}

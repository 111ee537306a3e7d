//! Library module: finds the audio files a run will process.
//!
//! `walk` enumerates matching files lazily under a root directory and
//! `AudioTrack` carries each file's path with the search term derived from
//! its name.

mod display;
mod model;
mod scan;

pub use model::*;
pub use scan::{ScanError, walk};

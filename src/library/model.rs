use std::path::PathBuf;

use super::display::display_name;

/// One audio file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub path: PathBuf,
    /// File name without extension, used as the artwork search term.
    pub search_term: String,
}

impl AudioTrack {
    pub fn new(path: PathBuf) -> Self {
        let search_term = display_name(&path);
        Self { path, search_term }
    }
}

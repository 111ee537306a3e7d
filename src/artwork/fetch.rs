use std::fs;
use std::path::{Path, PathBuf};

use super::error::ArtError;
use super::http::HttpClient;

/// Destination of the cover image for `source`: `file_name` in the same
/// directory.
pub fn cover_path(source: &Path, file_name: &str) -> PathBuf {
    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(file_name)
}

/// Write `bytes` to `dest`, creating its directory first and replacing any
/// existing file.
pub fn write_cover(dest: &Path, bytes: &[u8]) -> Result<(), ArtError> {
    if let Some(dir) = dest.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(dest, bytes)?;
    Ok(())
}

/// Downloads artwork and stores it next to the audio file it belongs to.
pub struct Fetcher<'a, H> {
    http: &'a H,
    cover_file_name: &'a str,
}

impl<'a, H: HttpClient> Fetcher<'a, H> {
    pub fn new(http: &'a H, cover_file_name: &'a str) -> Self {
        Self {
            http,
            cover_file_name,
        }
    }

    /// Download `url` and write it as the cover for `source`. Returns the
    /// written path.
    pub fn save_cover(&self, source: &Path, url: &str) -> Result<PathBuf, ArtError> {
        let bytes = self.http.get_bytes(url)?;
        let dest = cover_path(source, self.cover_file_name.trim());
        write_cover(&dest, &bytes)?;
        Ok(dest)
    }
}

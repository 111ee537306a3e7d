use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;

use super::error::ArtError;

/// Read-only view of whether an audio file already carries cover art.
pub trait ArtInspector {
    /// `Ok(true)` iff the file's tag container holds at least one picture.
    fn has_embedded_art(&self, path: &Path) -> Result<bool, ArtError>;
}

/// `ArtInspector` backed by `lofty`.
///
/// The file is opened, read and closed within the call; the parsed
/// `TaggedFile` never outlives it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyInspector;

impl ArtInspector for LoftyInspector {
    fn has_embedded_art(&self, path: &Path) -> Result<bool, ArtError> {
        let options = ParseOptions::new()
            .read_properties(false)
            .read_cover_art(true);

        let tagged = Probe::open(path)?
            .options(options)
            .guess_file_type()?
            .read()?;

        Ok(tagged.tags().iter().any(|tag| !tag.pictures().is_empty()))
    }
}

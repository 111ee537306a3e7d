use std::path::Path;

/// Name shown in progress output and sent as the search term: the file
/// name with its extension stripped.
///
/// The stem is sent as-is, surrounding spaces included. Falls back to the
/// full file name when the stem is empty, and to `"UNKNOWN"` for paths
/// without a file name at all.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| path.file_name().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

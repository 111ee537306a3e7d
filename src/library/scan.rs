use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::AudioTrack;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory does not exist: {}. Please check the path and try again.", .0.display())]
    DirectoryNotFound(PathBuf),
}

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn has_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Lazy iterator over the audio files below a root directory.
///
/// Each file is yielded at most once, even when symlinked directories make
/// it reachable through several paths.
pub struct Walk {
    entries: walkdir::IntoIter,
    extensions: Vec<String>,
    include_hidden: bool,
    seen: HashSet<PathBuf>,
}

impl Iterator for Walk {
    type Item = AudioTrack;

    fn next(&mut self) -> Option<AudioTrack> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !self.include_hidden && entry.depth() > 0 && is_hidden(entry.path()) {
                if entry.file_type().is_dir() {
                    self.entries.skip_current_dir();
                }
                continue;
            }

            if !entry.file_type().is_file() || !has_extension(entry.path(), &self.extensions) {
                continue;
            }

            let path = entry.into_path();
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if !self.seen.insert(key) {
                debug!("Already visited {}, skipping", path.display());
                continue;
            }

            return Some(AudioTrack::new(path));
        }
    }
}

/// Enumerate audio files under `root`, recursing into subdirectories.
///
/// Fails before touching anything else when `root` is not an existing
/// directory. Entries are ordered by file name within each directory.
pub fn walk(root: &Path, settings: &LibrarySettings) -> Result<Walk, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    Ok(Walk {
        entries: walker.into_iter(),
        extensions: normalized_extensions(settings),
        include_hidden: settings.include_hidden,
        seen: HashSet::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(tracks: impl Iterator<Item = AudioTrack>) -> Vec<String> {
        tracks.map(|t| t.search_term).collect()
    }

    #[test]
    fn has_extension_matches_configured_extensions_case_insensitive() {
        let exts = normalized_extensions(&LibrarySettings {
            extensions: vec![".WAV".into(), " flac ".into(), "".into()],
            ..LibrarySettings::default()
        });
        assert_eq!(exts, vec!["wav".to_string(), "flac".to_string()]);
        assert!(has_extension(Path::new("/tmp/a.wav"), &exts));
        assert!(has_extension(Path::new("/tmp/a.WaV"), &exts));
        assert!(has_extension(Path::new("/tmp/a.flac"), &exts));
        assert!(!has_extension(Path::new("/tmp/a.mp3"), &exts));
        assert!(!has_extension(Path::new("/tmp/a"), &exts));
    }

    #[test]
    fn walk_fails_on_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = walk(&missing, &LibrarySettings::default()).err().unwrap();
        assert!(matches!(err, ScanError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn walk_fails_when_root_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("song.wav");
        fs::write(&file, b"not real").unwrap();
        assert!(walk(&file, &LibrarySettings::default()).is_err());
    }

    #[test]
    fn walk_recurses_and_filters_by_extension() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("Album A");
        let b = dir.path().join("Album B").join("Disc 1");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(dir.path().join("root.wav"), b"not real").unwrap();
        fs::write(a.join("one.WAV"), b"not real").unwrap();
        fs::write(a.join("cover.jpg"), b"jpeg").unwrap();
        fs::write(b.join("two.wav"), b"not real").unwrap();
        fs::write(b.join("three.mp3"), b"not real").unwrap();

        let found = names(walk(dir.path(), &LibrarySettings::default()).unwrap());
        assert_eq!(found.len(), 3);
        assert!(found.contains(&"root".to_string()));
        assert!(found.contains(&"one".to_string()));
        assert!(found.contains(&"two".to_string()));
    }

    #[test]
    fn walk_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        let hidden_dir = dir.path().join(".cache");
        fs::create_dir_all(&hidden_dir).unwrap();
        fs::write(hidden_dir.join("inside.wav"), b"not real").unwrap();
        fs::write(dir.path().join(".hidden.wav"), b"not real").unwrap();
        fs::write(dir.path().join("visible.wav"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let found = names(walk(dir.path(), &settings).unwrap());
        assert_eq!(found, vec!["visible".to_string()]);
    }

    #[test]
    fn walk_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.wav"), b"not real").unwrap();
        fs::write(d1.join("one.wav"), b"not real").unwrap();
        fs::write(d2.join("two.wav"), b"not real").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let found = names(walk(dir.path(), &settings).unwrap());
        assert!(found.contains(&"root".to_string()));
        assert!(found.contains(&"one".to_string()));
        assert!(!found.contains(&"two".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn walk_yields_each_file_once_through_symlinked_dirs() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("song.wav"), b"not real").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("alias")).unwrap();

        let found = names(walk(dir.path(), &LibrarySettings::default()).unwrap());
        assert_eq!(found, vec!["song".to_string()]);
    }
}

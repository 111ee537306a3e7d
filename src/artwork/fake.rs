//! In-memory stand-ins for the network and the tag reader.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::ArtError;
use super::http::HttpClient;
use super::inspect::ArtInspector;

type Handler = Box<dyn Fn(&str) -> Result<Vec<u8>, ArtError>>;

/// Records every requested URL and answers through `handler`.
pub struct FakeHttp {
    calls: RefCell<Vec<String>>,
    handler: Handler,
}

impl FakeHttp {
    pub fn new(handler: impl Fn(&str) -> Result<Vec<u8>, ArtError> + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl HttpClient for FakeHttp {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ArtError> {
        self.calls.borrow_mut().push(url.to_string());
        (self.handler)(url)
    }
}

/// Reports art for paths in `with_art`, fails for paths in `broken`.
#[derive(Default)]
pub struct FakeInspector {
    pub with_art: HashSet<PathBuf>,
    pub broken: HashSet<PathBuf>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeInspector {
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl ArtInspector for FakeInspector {
    fn has_embedded_art(&self, path: &Path) -> Result<bool, ArtError> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if self.broken.contains(path) {
            return Err(ArtError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "corrupt container",
            )));
        }
        Ok(self.with_art.contains(path))
    }
}

/// A search response body with one result carrying `artwork_url`, or no
/// results at all.
pub fn search_body(artwork_url: Option<&str>) -> Vec<u8> {
    match artwork_url {
        Some(url) => format!(
            r#"{{"resultCount":1,"results":[{{"wrapperType":"track","trackName":"x","artworkUrl100":"{url}"}}]}}"#
        )
        .into_bytes(),
        None => br#"{"resultCount":0,"results":[]}"#.to_vec(),
    }
}

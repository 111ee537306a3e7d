use log::debug;
use serde::Deserialize;

use crate::config::LookupSettings;

use super::error::ArtError;
use super::http::HttpClient;

/// Size marker the search API puts in `artworkUrl100`.
const LOW_RES_TOKEN: &str = "100x100";
/// Size marker swapped in to request a larger image from the same host.
const HIGH_RES_TOKEN: &str = "500x500";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "artworkUrl100")]
    artwork_url_100: Option<String>,
}

/// Replace every literal `100x100` in `url` with `500x500`.
pub fn upgrade_resolution(url: &str) -> String {
    url.replace(LOW_RES_TOKEN, HIGH_RES_TOKEN)
}

/// Build the search request URL for `term`.
pub fn search_url(settings: &LookupSettings, term: &str) -> String {
    format!(
        "{}?term={}&media={}&entity={}&limit={}",
        settings.endpoint,
        urlencoding::encode(term),
        urlencoding::encode(&settings.media),
        urlencoding::encode(&settings.entity),
        settings.limit
    )
}

/// Pull the upgraded artwork URL of the first result out of a search
/// response body.
///
/// An empty `results` array, or a first result without a usable
/// `artworkUrl100`, yields `None`. Bodies that are not JSON or lack a
/// `results` array are a parse error.
pub fn extract_artwork_url(body: &[u8]) -> Result<Option<String>, ArtError> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    Ok(response
        .results
        .into_iter()
        .next()
        .and_then(|hit| hit.artwork_url_100)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .map(|url| upgrade_resolution(&url)))
}

/// Looks up artwork URLs through the search API.
pub struct Locator<'a, H> {
    http: &'a H,
    settings: &'a LookupSettings,
}

impl<'a, H: HttpClient> Locator<'a, H> {
    pub fn new(http: &'a H, settings: &'a LookupSettings) -> Self {
        Self { http, settings }
    }

    /// One search request for `term`; network failures propagate.
    pub fn find_artwork(&self, term: &str) -> Result<Option<String>, ArtError> {
        let url = search_url(self.settings, term);
        debug!("Searching artwork: {url}");
        let body = self.http.get_bytes(&url)?;
        extract_artwork_url(&body)
    }
}

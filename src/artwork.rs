//! Artwork module: the three per-file stages after the walker.
//!
//! - `inspect`: does the file already carry an embedded picture?
//! - `locate`: ask the search API for an artwork URL.
//! - `fetch`: download the image and write it next to the audio file.
//!
//! Network access goes through the `HttpClient` trait so the stages can be
//! driven without a network.

mod error;
mod fetch;
mod http;
mod inspect;
mod locate;

pub use error::ArtError;
pub use fetch::Fetcher;
pub use http::{HttpClient, UreqClient};
pub use inspect::{ArtInspector, LoftyInspector};
pub use locate::Locator;

#[cfg(test)]
pub(crate) mod fake;

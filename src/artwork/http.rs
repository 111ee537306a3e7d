use std::io::Read;
use std::time::Duration;

use crate::config::HttpSettings;

use super::error::ArtError;

/// Minimal blocking HTTP capability used by the locator and the fetcher.
pub trait HttpClient {
    /// GET `url` and return the whole response body.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ArtError>;
}

/// `HttpClient` backed by a shared `ureq` agent.
pub struct UreqClient {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqClient {
    pub fn new(settings: &HttpSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.connect_timeout_secs))
            .timeout_read(Duration::from_secs(settings.read_timeout_secs))
            .build();

        Self {
            agent,
            user_agent: settings.user_agent.clone(),
        }
    }
}

impl HttpClient for UreqClient {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ArtError> {
        let response = self
            .agent
            .get(url)
            .set("User-Agent", &self.user_agent)
            .call()
            .map_err(|error| match error {
                ureq::Error::Status(status, _) => ArtError::Status {
                    status,
                    url: url.to_string(),
                },
                ureq::Error::Transport(transport) => ArtError::Network {
                    url: url.to_string(),
                    message: transport.to_string(),
                },
            })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|source| ArtError::Read {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes)
    }
}

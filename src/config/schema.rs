use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/coverfetch/config.toml` or `~/.config/coverfetch/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `COVERFETCH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// The defaults reproduce the built-in behavior, so running without any
/// configuration is always valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub lookup: LookupSettings,
    pub http: HttpSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["wav".into()],
            follow_links: true,
            include_hidden: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Search endpoint queried for artwork.
    pub endpoint: String,
    /// Value of the `media` query parameter.
    pub media: String,
    /// Value of the `entity` query parameter.
    pub entity: String,
    /// Value of the `limit` query parameter. Only the first result is used.
    pub limit: u32,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://itunes.apple.com/search".to_string(),
            media: "music".to_string(),
            entity: "song".to_string(),
            limit: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            user_agent: concat!("coverfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// File name written next to each art-less audio file.
    pub cover_file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            cover_file_name: "cover.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

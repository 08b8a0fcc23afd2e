use crate::library::Library;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PREFIX: &str = "/upnp";

/// Contents of `mediaway.hcl`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntrypointConfig {
    pub server: ServerConfig,

    /// Library file, relative to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub version: u32,

    /// e.g. "0.0.0.0:8008"
    pub listen: String,

    /// URL path the media tree is mounted under.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Optional number of worker threads - default is decided by Pingora.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Optional pid file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<PathBuf>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Contents of the library file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LibraryFile {
    #[serde(default)]
    pub movies: Vec<LibraryEntryConfig>,

    #[serde(default)]
    pub tvshows: Vec<LibraryEntryConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryEntryConfig {
    pub id: String,
    pub path: PathBuf,
}

/// Fully loaded and validated configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub library: Library,
}

use crate::library::Collection;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Server
    //-------------------------------------------------------------------------
    #[error("invalid version '{version}'")]
    #[diagnostic(help("the only supported config version is 1"))]
    InvalidVersion { version: u32 },

    #[error("invalid listen address '{listen}'")]
    #[diagnostic(help("use an ip:port pair, e.g. \"0.0.0.0:8008\""))]
    InvalidListen { listen: String },

    #[error("invalid media prefix '{prefix}'")]
    #[diagnostic(help("the prefix must be an absolute URL path, e.g. \"/upnp\""))]
    InvalidPrefix { prefix: String },

    #[error("invalid pid file path '{pid_file}': {reason}")]
    InvalidPidFile { pid_file: PathBuf, reason: String },

    //-------------------------------------------------------------------------
    // Library
    //-------------------------------------------------------------------------
    #[error("{collection} entry has an invalid id '{id}'")]
    #[diagnostic(help("entity ids are UUIDs, e.g. \"5d0c6f6e-3f4e-4b8b-9d5c-2f9a0b1c7e11\""))]
    InvalidEntityId { collection: Collection, id: String },

    #[error("duplicate {collection} entry '{id}'")]
    DuplicateEntity { collection: Collection, id: String },

    #[error("{collection} entry '{id}' has a relative root '{path}'")]
    #[diagnostic(help("library roots must be absolute paths"))]
    RelativeRoot {
        collection: Collection,
        id: String,
        path: PathBuf,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

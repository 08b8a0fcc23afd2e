use crate::conf::error::ConfigError;
use crate::conf::types::{
    EntrypointConfig, LibraryEntryConfig, LibraryFile, RuntimeConfig, ServerConfig,
};
use crate::library::{Collection, Library};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use uuid::Uuid;

pub const ENTRYPOINT_FILE: &str = "mediaway.hcl";

/// Load `<root>/mediaway.hcl` and the library file it points to.
pub fn load_config(root: &Path) -> Result<RuntimeConfig, ConfigError> {
    let entry_path = root.join(ENTRYPOINT_FILE);

    let entry = fs::read_to_string(&entry_path)
        .map_err(|e| ConfigError::read_file(&entry_path, e))?;

    let entry: EntrypointConfig =
        hcl::from_str(&entry).map_err(|e| ConfigError::parse(&entry_path, e))?;

    validate_server(&entry.server)?;

    let library = match &entry.library {
        Some(file) => load_library(&root.join(file))?,
        None => Library::new(),
    };

    Ok(RuntimeConfig {
        server: entry.server,
        library,
    })
}

/// Parse a library file into an immutable [`Library`].
pub fn load_library(path: &Path) -> Result<Library, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: LibraryFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    let mut library = Library::new();
    insert_entries(&mut library, Collection::Movies, parsed.movies)?;
    insert_entries(&mut library, Collection::TvShows, parsed.tvshows)?;

    Ok(library)
}

fn insert_entries(
    library: &mut Library,
    collection: Collection,
    entries: Vec<LibraryEntryConfig>,
) -> Result<(), ConfigError> {
    for entry in entries {
        let id = Uuid::parse_str(entry.id.trim()).map_err(|_| ConfigError::InvalidEntityId {
            collection,
            id: entry.id.clone(),
        })?;

        if !entry.path.is_absolute() {
            return Err(ConfigError::RelativeRoot {
                collection,
                id: entry.id,
                path: entry.path,
            });
        }

        if library.insert(collection, id, entry.path).is_some() {
            return Err(ConfigError::DuplicateEntity {
                collection,
                id: entry.id,
            });
        }
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.version != 1 {
        return Err(ConfigError::InvalidVersion {
            version: server.version,
        });
    }

    if server.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::InvalidListen {
            listen: server.listen.clone(),
        });
    }

    if !server.prefix.starts_with('/') {
        return Err(ConfigError::InvalidPrefix {
            prefix: server.prefix.clone(),
        });
    }

    if let Some(pid_file) = &server.pid_file {
        if pid_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidPidFile {
                pid_file: pid_file.clone(),
                reason: "path is empty".to_string(),
            });
        }
        if pid_file.is_dir() {
            return Err(ConfigError::InvalidPidFile {
                pid_file: pid_file.clone(),
                reason: "path is a directory".to_string(),
            });
        }
    }

    Ok(())
}

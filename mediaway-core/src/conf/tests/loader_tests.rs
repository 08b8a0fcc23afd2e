use crate::conf::types::DEFAULT_PREFIX;
use crate::conf::{ConfigError, load_config, load_library};
use crate::library::{Collection, EntityRegistry};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use uuid::Uuid;

const MOVIE_ID: &str = "5d0c6f6e-3f4e-4b8b-9d5c-2f9a0b1c7e11";
const SHOW_ID: &str = "9a1e2b3c-4d5e-4f60-8a7b-6c5d4e3f2a10";

fn write_entrypoint(dir: &Path, body: &str) {
    fs::write(dir.join("mediaway.hcl"), body).unwrap();
}

#[test]
fn load_minimal_config() {
    // Arrange
    let dir = tempdir().unwrap();
    write_entrypoint(
        dir.path(),
        r#"
server = {
  version = 1
  listen  = "127.0.0.1:8008"
}
"#,
    );

    // Act
    let cfg = load_config(dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.server.listen, "127.0.0.1:8008");
    assert_eq!(cfg.server.prefix, DEFAULT_PREFIX);
    assert_eq!(cfg.server.threads, None);
    assert!(cfg.library.is_empty());
}

#[test]
fn load_config_with_library() {
    // Arrange
    let dir = tempdir().unwrap();
    write_entrypoint(
        dir.path(),
        r#"
server = {
  version  = 1
  listen   = "0.0.0.0:8008"
  prefix   = "/media"
  threads  = 2
}

library = "library.hcl"
"#,
    );
    fs::write(
        dir.path().join("library.hcl"),
        format!(
            r#"
movies = [
  {{ id = "{MOVIE_ID}", path = "/media/movies/Heat (1995)" }}
]

tvshows = [
  {{ id = "{SHOW_ID}", path = "/media/tv/Columbo" }}
]
"#
        ),
    )
    .unwrap();

    // Act
    let cfg = load_config(dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.server.prefix, "/media");
    assert_eq!(cfg.server.threads, Some(2));
    assert_eq!(cfg.library.len(), 2);
    assert_eq!(
        cfg.library
            .lookup(Collection::Movies, Uuid::parse_str(MOVIE_ID).unwrap()),
        Some(PathBuf::from("/media/movies/Heat (1995)"))
    );
    assert_eq!(
        cfg.library
            .lookup(Collection::TvShows, Uuid::parse_str(SHOW_ID).unwrap()),
        Some(PathBuf::from("/media/tv/Columbo"))
    );
}

#[test]
fn missing_entrypoint_is_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn invalid_hcl_is_parse_error() {
    let dir = tempdir().unwrap();
    write_entrypoint(dir.path(), "server = {");

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unsupported_version_is_rejected() {
    let dir = tempdir().unwrap();
    write_entrypoint(
        dir.path(),
        r#"server = { version = 2, listen = "127.0.0.1:8008" }"#,
    );

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidVersion { version: 2 }));
}

#[test]
fn bad_listen_address_is_rejected() {
    let dir = tempdir().unwrap();
    write_entrypoint(
        dir.path(),
        r#"server = { version = 1, listen = "localhost" }"#,
    );

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidListen { .. }));
}

#[test]
fn relative_prefix_is_rejected() {
    let dir = tempdir().unwrap();
    write_entrypoint(
        dir.path(),
        r#"server = { version = 1, listen = "127.0.0.1:8008", prefix = "upnp" }"#,
    );

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPrefix { .. }));
}

#[test]
fn library_rejects_bad_uuid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.hcl");
    fs::write(&path, r#"movies = [ { id = "42", path = "/media/x" } ]"#).unwrap();

    let err = load_library(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidEntityId {
            collection: Collection::Movies,
            ..
        }
    ));
}

#[test]
fn library_rejects_duplicates_within_a_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.hcl");
    fs::write(
        &path,
        format!(
            r#"
movies = [
  {{ id = "{MOVIE_ID}", path = "/media/a" }},
  {{ id = "{MOVIE_ID}", path = "/media/b" }}
]
"#
        ),
    )
    .unwrap();

    let err = load_library(&path).unwrap_err();

    assert!(matches!(err, ConfigError::DuplicateEntity { .. }));
}

#[test]
fn library_allows_same_id_in_different_collections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.hcl");
    fs::write(
        &path,
        format!(
            r#"
movies  = [ {{ id = "{MOVIE_ID}", path = "/media/a" }} ]
tvshows = [ {{ id = "{MOVIE_ID}", path = "/media/b" }} ]
"#
        ),
    )
    .unwrap();

    let library = load_library(&path).unwrap();

    assert_eq!(library.count(Collection::Movies), 1);
    assert_eq!(library.count(Collection::TvShows), 1);
}

#[test]
fn library_rejects_relative_roots() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.hcl");
    fs::write(
        &path,
        format!(r#"tvshows = [ {{ id = "{SHOW_ID}", path = "tv/Columbo" }} ]"#),
    )
    .unwrap();

    let err = load_library(&path).unwrap_err();

    assert!(matches!(err, ConfigError::RelativeRoot { .. }));
}

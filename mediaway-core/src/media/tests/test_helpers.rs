use crate::library::{Collection, Library};
use crate::media::{StreamBody, StreamResponse};
use http::header::HeaderName;
use std::path::Path;
use tempfile::TempDir;
use tokio::io::AsyncReadExt;
use uuid::Uuid;

pub(crate) const PREFIX: &str = "/upnp";

/// A temp-dir backed library holding one movie with a 1000 byte file.
pub(crate) struct Fixture {
    pub dir: TempDir,
    pub id: Uuid,
    pub library: Library,
    pub content: Vec<u8>,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let movie_root = dir.path().join("Heat (1995)");
        std::fs::create_dir_all(movie_root.join("extras")).unwrap();

        let content: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(movie_root.join("Heat.mkv"), &content).unwrap();
        std::fs::write(movie_root.join("extras/trailer.mp4"), b"trailer").unwrap();

        // A file next to (not below) the movie root that must never be reachable.
        std::fs::write(dir.path().join("secret.txt"), b"top secret").unwrap();

        let id = Uuid::new_v4();
        let mut library = Library::new();
        library.insert(Collection::Movies, id, movie_root);

        Self {
            dir,
            id,
            library,
            content,
        }
    }

    pub fn movie_root(&self) -> std::path::PathBuf {
        self.dir.path().join("Heat (1995)")
    }

    pub fn url(&self, relative: &str) -> String {
        format!("{PREFIX}/movies/{}/{relative}", self.id)
    }
}

pub(crate) fn header<'a>(response: &'a StreamResponse, name: HeaderName) -> Option<&'a str> {
    response
        .headers
        .get(name)
        .map(|v| v.to_str().expect("header is ascii"))
}

/// Drain the body exactly the way the gateway does: at most `remaining` bytes.
pub(crate) async fn read_body(body: StreamBody) -> Vec<u8> {
    match body {
        StreamBody::Empty => Vec::new(),
        StreamBody::Bytes(bytes) => bytes.to_vec(),
        StreamBody::File { file, remaining } => {
            let mut buf = Vec::new();
            file.take(remaining).read_to_end(&mut buf).await.unwrap();
            buf
        }
    }
}

pub(crate) fn touch(path: &Path, content: &[u8]) {
    std::fs::write(path, content).unwrap();
}

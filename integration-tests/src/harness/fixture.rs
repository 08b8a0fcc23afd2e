use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;

pub const MEDIA_LEN: usize = 1000;

/// Deterministic, non-repeating-per-256 content for the main media file.
pub fn media_bytes() -> Vec<u8> {
    (0..MEDIA_LEN).map(|i| (i % 251) as u8).collect()
}

/// A config directory plus a one-movie library on disk.
///
/// Layout:
///
/// ```text
/// <tmp>/config/mediaway.hcl
/// <tmp>/config/library.hcl
/// <tmp>/media/Heat (1995)/Heat.mkv
/// <tmp>/media/Heat (1995)/extras/trailer.mp4
/// <tmp>/media/secret.txt
/// ```
pub struct MediaFixture {
    dir: TempDir,
    pub movie_id: Uuid,
}

impl MediaFixture {
    pub fn new(listen_port: u16) -> Self {
        let dir = tempfile::tempdir().expect("failed to create fixture dir");
        let movie_id = Uuid::new_v4();

        let media = dir.path().join("media");
        let movie = media.join("Heat (1995)");
        fs::create_dir_all(movie.join("extras")).unwrap();
        fs::write(movie.join("Heat.mkv"), media_bytes()).unwrap();
        fs::write(movie.join("extras").join("trailer.mp4"), b"trailer").unwrap();
        fs::write(media.join("secret.txt"), b"top secret").unwrap();

        let fixture = Self { dir, movie_id };

        fs::create_dir_all(fixture.config_dir()).unwrap();
        fs::write(
            fixture.config_dir().join("mediaway.hcl"),
            format!(
                r#"
server = {{
  version = 1
  listen  = "127.0.0.1:{listen_port}"
  prefix  = "/upnp"
  threads = 1
}}

library = "library.hcl"
"#
            ),
        )
        .unwrap();

        fixture.write_library(&[]);
        fixture
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn movie_root(&self) -> PathBuf {
        self.dir.path().join("media").join("Heat (1995)")
    }

    /// Rewrite `library.hcl` with the fixture movie plus the given tv shows.
    pub fn write_library(&self, tvshows: &[(Uuid, PathBuf)]) {
        let shows: String = tvshows
            .iter()
            .map(|(id, path)| format!("  {{ id = \"{id}\", path = \"{}\" }},\n", path.display()))
            .collect();

        fs::write(
            self.config_dir().join("library.hcl"),
            format!(
                "movies = [\n  {{ id = \"{}\", path = \"{}\" }},\n]\n\ntvshows = [\n{shows}]\n",
                self.movie_id,
                self.movie_root().display()
            ),
        )
        .unwrap();
    }
}

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

/// Top-level media collection addressed by the second URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Movies,
    TvShows,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Movies => "movies",
            Collection::TvShows => "tvshows",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection '{0}'")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movies" => Ok(Collection::Movies),
            "tvshows" => Ok(Collection::TvShows),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}

/// Maps a library entity to the directory its media files live in.
///
/// Implementations must be safe to read from many requests at once; the
/// file server never mutates the registry.
pub trait EntityRegistry: Send + Sync {
    fn lookup(&self, collection: Collection, id: Uuid) -> Option<PathBuf>;
}

/// Immutable snapshot of the media library.
#[derive(Debug, Clone, Default)]
pub struct Library {
    roots: HashMap<(Collection, Uuid), PathBuf>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity root. Returns the previous root if the id was already known.
    pub fn insert(
        &mut self,
        collection: Collection,
        id: Uuid,
        root: impl Into<PathBuf>,
    ) -> Option<PathBuf> {
        self.roots.insert((collection, id), root.into())
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.roots.keys().filter(|(c, _)| *c == collection).count()
    }

    pub fn root(&self, collection: Collection, id: Uuid) -> Option<&Path> {
        self.roots.get(&(collection, id)).map(PathBuf::as_path)
    }
}

impl EntityRegistry for Library {
    fn lookup(&self, collection: Collection, id: Uuid) -> Option<PathBuf> {
        self.root(collection, id).map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collection_round_trips_through_its_url_segment() {
        for collection in [Collection::Movies, Collection::TvShows] {
            assert_eq!(collection.as_str().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn collection_segment_is_case_sensitive() {
        assert!("Movies".parse::<Collection>().is_err());
        assert!("tvshow".parse::<Collection>().is_err());
    }

    #[test]
    fn lookup_is_scoped_to_collection() {
        let id = Uuid::new_v4();
        let mut library = Library::new();
        library.insert(Collection::Movies, id, "/media/movies/Heat (1995)");

        assert_eq!(
            library.lookup(Collection::Movies, id),
            Some(PathBuf::from("/media/movies/Heat (1995)"))
        );
        assert_eq!(library.lookup(Collection::TvShows, id), None);
        assert_eq!(library.count(Collection::Movies), 1);
        assert_eq!(library.count(Collection::TvShows), 0);
    }
}

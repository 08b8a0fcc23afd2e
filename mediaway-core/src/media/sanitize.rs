use std::path::{Component, Path, PathBuf};

/// Reduce a client-supplied relative path to plain, forward-only components.
///
/// Rejects (`None`) anything that could leave the entity root: `..`, absolute
/// roots, Windows prefixes, NUL bytes. `.` components are dropped. An empty
/// result is rejected too.
pub fn sanitize_relative_path(relative: &str) -> Option<PathBuf> {
    if relative.contains('\0') {
        return None;
    }

    let mut clean = PathBuf::new();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, Prefix (Windows): all forbidden
            _ => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Join a sanitized relative path onto an entity root. No filesystem access.
pub fn resolve_media_path(root: &Path, relative: &str) -> Option<PathBuf> {
    sanitize_relative_path(relative).map(|rel| root.join(rel))
}

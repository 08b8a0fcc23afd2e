use std::path::Path;

/// Media containers renderers expect under a specific name, checked before `mime_guess`.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mkv", "video/x-matroska"),
    ("mk3d", "video/x-matroska"),
    ("mka", "audio/x-matroska"),
    ("ts", "video/mp2t"),
    ("m2ts", "video/mp2t"),
    ("mts", "video/mp2t"),
    ("vob", "video/dvd"),
    ("divx", "video/divx"),
    ("srt", "application/x-subrip"),
    ("sub", "text/plain"),
    ("nfo", "text/xml"),
];

/// Content-Type for a media file, derived from its extension only.
pub fn content_type_for(path: &Path) -> String {
    let known = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .and_then(|ext| MEDIA_TYPES.iter().find(|(known, _)| *known == ext));

    if let Some((_, mime)) = known {
        return (*mime).to_string();
    }

    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

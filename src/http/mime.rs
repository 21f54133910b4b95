//! MIME type detection
//!
//! Maps the text after the last `.` of a path to a Content-Type.

/// Fallback for unknown or missing extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

static MIME_TYPES: &[(&str, &str)] = &[
    // Text
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("xml", "application/xml"),
    // Scripts and data
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("json", "application/json"),
    ("wasm", "application/wasm"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    // Media
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    // Fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    // Archives and documents
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
];

/// Get the Content-Type for a request path.
///
/// # Examples
/// ```
/// use minihttpd::http::mime::content_type_for;
/// assert_eq!(content_type_for("/index.HTML"), "text/html");
/// assert_eq!(content_type_for("/archive.tar.gz"), "application/gzip");
/// assert_eq!(content_type_for("/README"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_MIME_TYPE;
    };

    MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for("/a.html"), "text/html");
        assert_eq!(content_type_for("/a.css"), "text/css");
        assert_eq!(content_type_for("/a.js"), "application/javascript");
        assert_eq!(content_type_for("/a.json"), "application/json");
        assert_eq!(content_type_for("/a.PNG"), "image/png");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for("/a.xyz"), DEFAULT_MIME_TYPE);
        assert_eq!(content_type_for("/noext"), DEFAULT_MIME_TYPE);
        assert_eq!(content_type_for("/trailing."), DEFAULT_MIME_TYPE);
    }
}

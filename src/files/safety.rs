/// Returns `true` when `path` may be mapped under the document root.
///
/// The path must start with `/` and must not contain `..` anywhere. This also
/// rejects names like `/notes..txt`; that over-rejection is accepted.
pub fn is_safe_path(path: &str) -> bool {
    path.starts_with('/') && !path.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rooted_paths() {
        assert!(is_safe_path("/"));
        assert!(is_safe_path("/css/site.css"));
        assert!(is_safe_path("/a.b/c"));
    }

    #[test]
    fn rejects_parent_segments_anywhere() {
        assert!(!is_safe_path("/../etc/passwd"));
        assert!(!is_safe_path("/a/../../b"));
        assert!(!is_safe_path("/notes..txt"));
        assert!(!is_safe_path("/.."));
    }

    #[test]
    fn rejects_unrooted_paths() {
        assert!(!is_safe_path(""));
        assert!(!is_safe_path("etc/passwd"));
    }
}

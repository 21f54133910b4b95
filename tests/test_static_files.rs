mod common;

use common::TempRoot;
use minihttpd::files::{StaticFileError, StaticFiles};
use minihttpd::http::response::StatusCode;

#[tokio::test]
async fn test_serves_file_with_mime_type() {
    let root = TempRoot::new("static-mime");
    root.write("css/site.css", b"body { color: red; }");
    let files = StaticFiles::new(root.path(), "index.html");

    let file = files.resolve("/css/site.css").await.unwrap();

    assert_eq!(file.content_type, "text/css");
    assert_eq!(file.body, b"body { color: red; }".to_vec());
}

#[tokio::test]
async fn test_directory_falls_back_to_index() {
    let root = TempRoot::new("static-index");
    root.write("docs/index.html", b"<h1>docs</h1>");
    let files = StaticFiles::new(root.path(), "index.html");

    for path in ["/docs", "/docs/"] {
        let file = files.resolve(path).await.unwrap();
        assert_eq!(file.body, b"<h1>docs</h1>".to_vec());
        assert_eq!(file.content_type, "text/html");
    }
}

#[tokio::test]
async fn test_custom_index_file_name() {
    let root = TempRoot::new("static-custom-index");
    root.write("default.txt", b"hello");
    let files = StaticFiles::new(root.path(), "default.txt");

    let file = files.resolve("/").await.unwrap();
    assert_eq!(file.body, b"hello".to_vec());
    assert_eq!(file.content_type, "text/plain");
}

#[tokio::test]
async fn test_directory_without_index_is_not_found() {
    let root = TempRoot::new("static-no-index");
    root.mkdir("empty");
    let files = StaticFiles::new(root.path(), "index.html");

    let err = files.resolve("/empty/").await.unwrap_err();
    assert!(matches!(err, StaticFileError::NotFound));
    assert_eq!(err.status(), StatusCode::NotFound);
}

#[tokio::test]
async fn test_index_that_is_a_directory_is_not_found() {
    let root = TempRoot::new("static-index-dir");
    root.mkdir("weird/index.html");
    let files = StaticFiles::new(root.path(), "index.html");

    let err = files.resolve("/weird").await.unwrap_err();
    assert!(matches!(err, StaticFileError::NotFound));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let root = TempRoot::new("static-missing");
    let files = StaticFiles::new(root.path(), "index.html");

    let err = files.resolve("/nope.html").await.unwrap_err();
    assert!(matches!(err, StaticFileError::NotFound));
}

#[tokio::test]
async fn test_traversal_is_forbidden_not_missing() {
    let root = TempRoot::new("static-traversal");
    root.write("notes..txt", b"secret-ish");
    let files = StaticFiles::new(root.path(), "index.html");

    for path in ["/../etc/passwd", "/a/../../b", "/notes..txt"] {
        let err = files.resolve(path).await.unwrap_err();
        assert!(matches!(err, StaticFileError::Forbidden), "{path}");
        assert_eq!(err.status(), StatusCode::BadRequest);
    }
}

#[tokio::test]
async fn test_serving_twice_is_identical() {
    let root = TempRoot::new("static-idempotent");
    let payload: Vec<u8> = (0..=255u8).cycle().take(50_000).collect();
    root.write("blob.bin", &payload);
    let files = StaticFiles::new(root.path(), "index.html");

    let first = files.resolve("/blob.bin").await.unwrap();
    let second = files.resolve("/blob.bin").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.body.len(), payload.len());
    assert_eq!(first.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_empty_file() {
    let root = TempRoot::new("static-empty");
    root.write("empty.txt", b"");
    let files = StaticFiles::new(root.path(), "index.html");

    let file = files.resolve("/empty.txt").await.unwrap();
    assert!(file.body.is_empty());
}

#[test]
fn test_internal_error_maps_to_500() {
    let err = StaticFileError::Internal(std::io::Error::other("boom"));
    assert_eq!(err.status(), StatusCode::InternalServerError);
}

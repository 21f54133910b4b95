use minihttpd::http::request::{Method, RequestBuilder};

#[test]
fn test_request_builder_defaults_to_get() {
    let req = RequestBuilder::new().path("/").build().unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/");
    assert!(req.query.is_empty());
}

#[test]
fn test_request_builder_requires_rooted_path() {
    assert!(RequestBuilder::new().build().is_err());
    assert!(RequestBuilder::new().path("").build().is_err());
    assert!(RequestBuilder::new().path("relative").build().is_err());
}

#[test]
fn test_request_query_param_lookup() {
    let req = RequestBuilder::new()
        .path("/search")
        .query_param("q", "rust")
        .query_param("q", "go")
        .build()
        .unwrap();

    assert_eq!(req.query_param("q"), Some("rust"));
    assert_eq!(req.query_param("missing"), None);
}

#[test]
fn test_request_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

#[test]
fn test_request_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("POST"), Method::POST);
    assert_eq!(Method::from_token("get"), Method::Extension("get".to_string())); // Case-sensitive
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::DELETE.to_string(), "DELETE");
    assert_eq!(Method::Extension("PURGE".to_string()).to_string(), "PURGE");
}

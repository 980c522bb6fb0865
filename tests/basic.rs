use tinycurl::utils::UrlUtils;

#[test]
fn test_version() {
    assert!(!tinycurl::VERSION.is_empty());
}

#[test]
fn test_url_utils_requires_scheme() {
    assert!(UrlUtils::validate_url("example.com").is_err());
    let url = UrlUtils::validate_url("http://example.com").expect("URL should parse");
    assert_eq!(url.scheme(), "http");
}

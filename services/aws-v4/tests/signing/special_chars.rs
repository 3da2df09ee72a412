use super::init_signing_test;
use anyhow::Result;
use pretty_assertions::assert_eq;
use sigv4_aws::{HttpRequest, EMPTY_STRING_SHA256};

fn canonical_path_and_query(service: &str, req: &HttpRequest) -> Result<(String, String)> {
    let signer = init_signing_test()
        .header("Host", "example.amazonaws.com")
        .header("X-Amz-Date", "20150830T123600Z")
        .build(req, service, EMPTY_STRING_SHA256)?;

    let mut lines = signer.canonical_request().as_str().lines();
    lines.next();
    let path = lines.next().unwrap_or_default().to_string();
    let query = lines.next().unwrap_or_default().to_string();
    Ok((path, query))
}

#[test]
fn test_s3_path_is_not_normalized() -> Result<()> {
    let req = HttpRequest::new("GET", "/my-object//example//photo.user", None);

    let (path, _) = canonical_path_and_query("s3", &req)?;
    assert_eq!(path, "/my-object//example//photo.user");

    let (path, _) = canonical_path_and_query("service", &req)?;
    assert_eq!(path, "/my-object/example/photo.user");
    Ok(())
}

#[test]
fn test_dot_segments() -> Result<()> {
    let req = HttpRequest::new("GET", "/example1/example2/../..", None);
    let (path, _) = canonical_path_and_query("service", &req)?;
    assert_eq!(path, "/");

    let req = HttpRequest::new("GET", "/./a/b/../c", None);
    let (path, _) = canonical_path_and_query("service", &req)?;
    assert_eq!(path, "/a/c");
    Ok(())
}

#[test]
fn test_special_characters_in_path() -> Result<()> {
    let req = HttpRequest::new("GET", "/!@#$^&*()_+-=;:'><,.txt", None);
    let (path, _) = canonical_path_and_query("s3", &req)?;
    assert_eq!(
        path,
        "/%21%40%23%24%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C.txt"
    );
    Ok(())
}

#[test]
fn test_encoded_path_is_encoded_again() -> Result<()> {
    let req = HttpRequest::new("GET", "/hello%20world", None);
    let (path, _) = canonical_path_and_query("service", &req)?;
    assert_eq!(path, "/hello%2520world");
    Ok(())
}

#[test]
fn test_query_name_with_ampersand() -> Result<()> {
    let req = HttpRequest::new("GET", "/", Some("foo&bar=qux"));
    let (_, query) = canonical_path_and_query("service", &req)?;
    assert_eq!(query, "foo%26bar=qux");
    Ok(())
}

#[test]
fn test_query_utf8_and_reserved() -> Result<()> {
    let req = HttpRequest::new("GET", "/", Some("ሴ=bar&prefix=CI/&a=b c"));
    let (_, query) = canonical_path_and_query("service", &req)?;
    assert_eq!(query, "a=b%20c&prefix=CI%2F&%E1%88%B4=bar");
    Ok(())
}

#[test]
fn test_absent_query() -> Result<()> {
    let req = HttpRequest::new("GET", "/", None);
    let (_, query) = canonical_path_and_query("service", &req)?;
    assert_eq!(query, "");
    Ok(())
}

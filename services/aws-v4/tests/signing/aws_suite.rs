//! Cases from the AWS SigV4 test suite (`aws-sig-v4-test-suite`, 2015-08-30).
//!
//! Every request is sent to `example.amazonaws.com` in `us-east-1` for the
//! service `service`, signed at `20150830T123600Z` with an empty body.

use anyhow::Result;
use pretty_assertions::assert_eq;
use sigv4_aws::{Credential, HttpRequest, Signer, EMPTY_STRING_SHA256};
use test_case::test_case;

const DATE: &str = "20150830T123600Z";

fn sign(method: &str, path_and_query: &str, headers: &[(&str, &str)]) -> Result<Signer> {
    let _ = env_logger::builder().is_test(true).try_init();

    let req = HttpRequest::from_path_and_query(method, path_and_query);
    let signer = Signer::builder()
        .credential(Credential::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        ))
        .header("Host", "example.amazonaws.com")
        .headers(headers.iter().copied())
        .header("X-Amz-Date", DATE)
        .build(&req, "service", EMPTY_STRING_SHA256)?;
    Ok(signer)
}

#[test_case("GET", "/", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "get-vanilla")]
#[test_case("GET", "/?", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "get-vanilla-query")]
#[test_case("POST", "/", &[], "5da7c1a2acd57cee7505fc6676e4e544621c30862966e37dddb68e92efbe5d6b"; "post-vanilla")]
#[test_case("POST", "/?Param1=value1", &[], "28038455d6de14eafc1f9222cf5aa6f1a96197d7deb8263271d420d138af7f11"; "post-vanilla-query")]
#[test_case(
    "GET", "/",
    &[("My-Header1", "value2"), ("My-Header1", "value2"), ("My-Header1", "value1")],
    "c9d5ea9f3f72853aea855b47ea873832890dbdd183b4468f858259531a5138ea";
    "get-header-key-duplicate"
)]
#[test_case(
    "GET", "/",
    &[("My-Header1", "value4"), ("My-Header1", "value1"), ("My-Header1", "value3"), ("My-Header1", "value2")],
    "08c7e5a9acfcfeb3ab6b2185e75ce8b1deb5e634ec47601a50643f830c755c01";
    "get-header-value-order"
)]
#[test_case(
    "GET", "/",
    &[("My-Header1", " value1"), ("My-Header2", " \"a   b   c\"")],
    "acc3ed3afb60bb290fc8d2dd0098b9911fcaa05412b367055dee359757a9c736";
    "get-header-value-trim"
)]
#[test_case(
    "GET", "/",
    &[("My-Header1", "value1\n  value2\n     value3")],
    "ba17b383a53190154eb5fa66a1b836cc297cc0a3d70a5d00705980573d8ff790";
    "get-header-value-multiline"
)]
#[test_case("GET", "/ሴ", &[], "8318018e0b0f223aa2bbf98705b62bb787dc9c0e678f255a891fd03141be5d85"; "get-utf8")]
#[test_case("GET", "/example space/", &[], "652487583200325589f1fba4c7e578f72c47cb61beeca81406b39ddec1366741"; "get-space")]
#[test_case(
    "GET", "/-._~0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    &[],
    "07ef7494c76fa4850883e2b006601f940f8a34d404d0cfa977f52a65bbf5f24f";
    "get-unreserved"
)]
#[test_case("GET", "/?Param1=value1", &[], "a67d582fa61cc504c4bae71f336f98b97f1ea3c7a6bfe1b6e45aec72011b9aeb"; "get-vanilla-empty-query-key")]
#[test_case(
    "GET", "/?Param2=value2&Param1=value1",
    &[],
    "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500";
    "get-vanilla-query-order-key-case"
)]
#[test_case(
    "GET",
    "/?-._~0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz=-._~0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    &[],
    "9c3e54bfcdf0b19771a7f523ee5669cdf59bc7cc0884027167c21bb143a40197";
    "get-vanilla-query-unreserved"
)]
#[test_case("GET", "/?ሴ=bar", &[], "2cdec8eed098649ff3a119c94853b13c643bcf08f8b0a1d91e12c9027818dd04"; "get-vanilla-utf8-query")]
#[test_case("GET", "/example/..", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "normalize-path get-relative")]
#[test_case("GET", "/example1/example2/../..", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "normalize-path get-relative-relative")]
#[test_case("GET", "//", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "normalize-path get-slash")]
#[test_case("GET", "/./", &[], "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "normalize-path get-slash-dot-slash")]
#[test_case("GET", "/./example", &[], "ef75d96142cf21edca26f06005da7988e4f8dc83a165a80865db7089db637ec5"; "normalize-path get-slash-pointless-dot")]
#[test_case("GET", "//example//", &[], "9a624bd73a37c9a373b5312afbebe7a714a789de108f0bdfe846570885f57e84"; "normalize-path get-slashes")]
fn test_aws_suite(
    method: &str,
    path_and_query: &str,
    headers: &[(&str, &str)],
    signature: &str,
) -> Result<()> {
    let signer = sign(method, path_and_query, headers)?;

    assert_eq!(signer.signature(), signature);
    assert!(signer
        .authorization()
        .starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, "));
    Ok(())
}

#[test]
fn test_aws_suite_header_value_trim_canonical_request() -> Result<()> {
    let signer = sign(
        "GET",
        "/",
        &[("My-Header1", " value1"), ("My-Header2", " \"a   b   c\"")],
    )?;

    assert_eq!(
        signer.canonical_request().as_str(),
        "GET\n\
         /\n\
         \n\
         host:example.amazonaws.com\n\
         my-header1:value1\n\
         my-header2:\"a b c\"\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         host;my-header1;my-header2;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    Ok(())
}

/// post-vanilla-query-nonunreserved: the scan looks for `=` before `&`, so an
/// `&` in front of the first `=` stays part of the parameter name.
#[test]
fn test_aws_suite_post_query_nonunreserved() -> Result<()> {
    let signer = sign(
        "POST",
        "/?@#$%^&+=/,?><`\";:\\|][{} =@#$%^&+=/,?><`\";:\\|][{} ",
        &[],
    )?;

    assert_eq!(
        signer.canonical_request().as_str(),
        "POST\n\
         /\n\
         %2B=%2F%2C%3F%3E%3C%60%22%3B%3A%5C%7C%5D%5B%7B%7D%20\
         &%40%23%24%25%5E%26%2B=%2F%2C%3F%3E%3C%60%22%3B%3A%5C%7C%5D%5B%7B%7D%20%3D%40%23%24%25%5E\n\
         host:example.amazonaws.com\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         host;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        signer.signature(),
        "3cf0f1a5fb19cfce4ea7bef28b0b0e03a62f9accf6cc9535b0eb56e16a207a84"
    );
    Ok(())
}

#[test]
fn test_aws_suite_date_without_zone() -> Result<()> {
    let req = HttpRequest::from_path_and_query("GET", "/");
    let signer = Signer::builder()
        .credential(Credential::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        ))
        .header("Host", "example.amazonaws.com")
        .header("X-Amz-Date", "20150830T123600")
        .build(&req, "service", EMPTY_STRING_SHA256)?;

    assert_eq!(
        signer.scope().to_string(),
        "20150830/us-east-1/service/aws4_request"
    );
    assert!(signer.string_to_sign().starts_with(
        "AWS4-HMAC-SHA256\n20150830T123600\n20150830/us-east-1/service/aws4_request\n"
    ));
    Ok(())
}

//! Origin derivation and exact-matching rules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use embedlink_core::error::DiagCode;
use embedlink_core::protocol::origin::Origin;

#[test]
fn origin_strips_path_and_query() {
    let o = Origin::parse("https://content.example/activities/7?attempt=2#intro").unwrap();
    assert_eq!(o.as_str(), "https://content.example");
}

#[test]
fn default_port_is_omitted_explicit_port_kept() {
    let default = Origin::parse("https://content.example:443/x").unwrap();
    assert_eq!(default.as_str(), "https://content.example");

    let explicit = Origin::parse("https://content.example:8443/x").unwrap();
    assert_eq!(explicit.as_str(), "https://content.example:8443");
}

#[test]
fn scheme_and_host_are_normalized_lowercase() {
    let o = Origin::parse("HTTPS://Content.Example/Activity").unwrap();
    assert_eq!(o.as_str(), "https://content.example");
}

#[test]
fn matching_is_exact() {
    let o = Origin::parse("https://trusted.example/widget").unwrap();

    assert!(o.matches("https://trusted.example"));
    // No scheme fuzzing.
    assert!(!o.matches("http://trusted.example"));
    // No subdomain fuzzing.
    assert!(!o.matches("https://sub.trusted.example"));
    assert!(!o.matches("https://trusted.example.evil.example"));
    // No port fuzzing.
    assert!(!o.matches("https://trusted.example:8443"));
}

#[test]
fn empty_and_blank_urls_are_invalid() {
    for bad in ["", "   "] {
        let e = Origin::parse(bad).expect_err("must fail");
        assert_eq!(e.diag_code(), DiagCode::InvalidUrl);
    }
}

#[test]
fn relative_url_is_invalid() {
    let e = Origin::parse("activities/7").expect_err("must fail");
    assert_eq!(e.diag_code(), DiagCode::InvalidUrl);
}

#[test]
fn opaque_origin_is_invalid() {
    let e = Origin::parse("data:text/html,<h1>hi</h1>").expect_err("must fail");
    assert_eq!(e.diag_code(), DiagCode::InvalidUrl);
}

#![allow(dead_code)]

use crate::common::headers::{header_value, vary_values};
use sdt_cors::constants::header;
use sdt_cors::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_vary_eq<'a, I>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let expected: std::collections::HashSet<String> =
        expected.into_iter().map(str::to_string).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_contains(headers: &Headers, entry: &str) {
    assert!(
        vary_values(headers).contains(entry),
        "Vary should contain {entry}"
    );
}

pub fn assert_no_header(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "header {name} should be absent"
    );
}

pub fn assert_no_allow_origin(headers: &Headers) {
    assert_no_header(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN);
}

//! URI component encoding for REST paths and query strings.
//!
//! Matches the browser's `encodeURIComponent`: every byte of the UTF-8
//! encoding is percent-escaped except the unreserved set
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.

#[cfg(test)]
#[path = "uri_test.rs"]
mod uri_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

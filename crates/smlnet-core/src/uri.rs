//! `encodeURIComponent`-compatible percent-encoding.
//!
//! The consent cookie value and generated `mailto:` links must stay
//! byte-compatible with what the browser site produced, so the escape set
//! mirrors `encodeURIComponent` exactly: everything except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )` is escaped, and non-ASCII text is
//! escaped as UTF-8 bytes.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape a string the way `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reverse of [`encode_component`]. `None` when the decoded bytes are not
/// valid UTF-8.
pub fn decode_component(text: &str) -> Option<String> {
    percent_decode_str(text).decode_utf8().ok().map(Cow::into_owned)
}

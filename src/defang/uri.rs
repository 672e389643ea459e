//! Apply scheme defanging to the scheme label of a full URI string.
//!
//! Only the label before the first `:` is touched; authority, path and query
//! pass through untouched.

use std::borrow::Cow;

use super::defang;
use crate::patterns::{RE_DEFANGED_PREFIX, RE_URI_SCHEME_PREFIX};
use crate::registry::RefangTable;

/// Defang the scheme of `text` if it starts with one.
/// - `https://example.com` -> `hxxps://example.com`
/// - `coap+tcp://host` -> `coap[+]tcp://host`
///
/// Text without a scheme prefix, or with a single-letter label such as a
/// Windows drive (`C:\`), is returned borrowed.
pub fn defang_uri(text: &str) -> Cow<'_, str> {
    let Some(caps) = RE_URI_SCHEME_PREFIX.captures(text) else {
        return Cow::Borrowed(text);
    };
    let label = &caps[1];
    let rest = &text[label.len()..];
    match defang(&label.to_ascii_lowercase()) {
        Ok(defanged) => Cow::Owned(format!("{}{}", defanged, rest)),
        Err(_) => Cow::Borrowed(text),
    }
}

/// Restore the scheme of a defanged URI using `table`.
///
/// Labels the table does not know are left alone, so ordinary URIs pass
/// through unchanged.
pub fn refang_uri<'a>(text: &'a str, table: &RefangTable) -> Cow<'a, str> {
    let Some(caps) = RE_DEFANGED_PREFIX.captures(text) else {
        return Cow::Borrowed(text);
    };
    let label = &caps[1];
    match table.refang(&label.to_ascii_lowercase()) {
        Some(original) => Cow::Owned(format!("{}{}", original, &text[label.len()..])),
        None => Cow::Borrowed(text),
    }
}

//! Precompiled regex patterns for scheme tokens.
//!
//! RFC 3986 section 3.1: `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
//! Registry names are stored lowercase, so the strict pattern only admits
//! lowercase letters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters besides letters and digits that may appear in a scheme.
pub const RESERVED_SCHEME_CHARS: [char; 3] = ['-', '+', '.'];

/// Lowercase registry scheme name.
pub static RE_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-z][a-z0-9+\-.]*$"#).expect("valid scheme regex"));

/// Maximal runs of reserved characters, wrapped as a unit when defanging.
pub static RE_RESERVED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\-+.]+"#).expect("valid reserved run regex"));

// Scheme label at the start of a URI, case-insensitive per RFC 3986
pub static RE_URI_SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([A-Za-z][A-Za-z0-9+\-.]*):"#).expect("valid uri scheme prefix regex")
});

// Defanged labels may additionally carry bracket delimiters
pub static RE_DEFANGED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([A-Za-z][A-Za-z0-9+\-.\[\]]*):"#).expect("valid defanged prefix regex")
});

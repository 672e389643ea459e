//! Scheme defanging.
//!
//! A scheme is defanged by walking an ordered rule table and applying the
//! first rule whose predicate holds. The order is part of the contract: the
//! `http[s]` convention is checked before bracket wrapping, and bracket
//! wrapping before any of the length-based marker rules.
//!
//! Marker substitution only makes a scheme invalid if the result is not
//! itself registered, which is what [`crate::verify`] checks. Bracket
//! wrapping is always invalid because `[` and `]` never appear in a scheme.
//! The positions used by the length rules are fixed policy tuned against
//! the IANA registry (`icap`/`imap` is why 4-letter schemes mark position 2).

pub mod uri;

use std::fmt;
use tracing::debug;

use crate::error::{DefangError, Result};
use crate::patterns::{RESERVED_SCHEME_CHARS, RE_RESERVED_RUN};

/// Character substituted into defanged schemes.
pub const MARKER: char = 'x';

/// Identifies which rule produced (or rejected) a defanged scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Fewer than two characters; rejected
    TooShort,
    /// `http` and `https` become `hxxp` and `hxxps`
    HttpConvention,
    /// Runs of `-`, `+`, `.` are wrapped in brackets
    ReservedChars,
    ThreeChars,
    TwoChars,
    FourChars,
    /// Longer schemes mark positions 1 and 2 like `http[s]`
    Default,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::TooShort => "too_short",
            RuleKind::HttpConvention => "http_convention",
            RuleKind::ReservedChars => "reserved_chars",
            RuleKind::ThreeChars => "three_chars",
            RuleKind::TwoChars => "two_chars",
            RuleKind::FourChars => "four_chars",
            RuleKind::Default => "default",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Reject,
    Mark(&'static [usize]),
    WrapReserved,
}

/// One guard/transform entry of the rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    guard: fn(&str, usize) -> bool,
    action: Action,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("action", &self.action)
            .finish()
    }
}

impl Rule {
    /// Whether this rule's predicate holds for `scheme`.
    pub fn applies(&self, scheme: &str) -> bool {
        (self.guard)(scheme, scheme.chars().count())
    }

    /// Apply this rule's transform regardless of its predicate.
    pub fn apply(&self, scheme: &str) -> Result<String> {
        match self.action {
            Action::Reject => Err(DefangError::InvalidInput {
                scheme: scheme.to_string(),
            }),
            Action::Mark(positions) => Ok(mark_positions(scheme, positions)),
            Action::WrapReserved => Ok(wrap_reserved_runs(scheme)),
        }
    }
}

fn has_reserved(s: &str) -> bool {
    s.contains(RESERVED_SCHEME_CHARS)
}

/// Ordered rule table; the first applicable entry wins.
pub static RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::TooShort,
        guard: |_, len| len < 2,
        action: Action::Reject,
    },
    Rule {
        kind: RuleKind::HttpConvention,
        guard: |s, _| s == "http" || s == "https",
        action: Action::Mark(&[1, 2]),
    },
    Rule {
        kind: RuleKind::ReservedChars,
        guard: |s, _| has_reserved(s),
        action: Action::WrapReserved,
    },
    Rule {
        kind: RuleKind::ThreeChars,
        guard: |_, len| len == 3,
        action: Action::Mark(&[1]),
    },
    Rule {
        kind: RuleKind::TwoChars,
        guard: |_, len| len == 2,
        action: Action::Mark(&[1]),
    },
    Rule {
        kind: RuleKind::FourChars,
        guard: |_, len| len == 4,
        action: Action::Mark(&[2]),
    },
    Rule {
        kind: RuleKind::Default,
        guard: |_, _| true,
        action: Action::Mark(&[1, 2]),
    },
];

/// Find the rule that decides how `scheme` is defanged.
pub fn matching_rule(scheme: &str) -> &'static Rule {
    // The last rule accepts everything, so the search always succeeds
    RULES
        .iter()
        .find(|r| r.applies(scheme))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Defang `scheme`, also reporting which rule was applied.
pub fn defang_with_rule(scheme: &str) -> Result<(RuleKind, String)> {
    let rule = matching_rule(scheme);
    let out = rule.apply(scheme)?;
    debug!(scheme, defanged = %out, rule = %rule.kind, "defanged scheme");
    Ok((rule.kind, out))
}

/// Defang a single scheme token, e.g. `https` -> `hxxps`, `coap+tcp` -> `coap[+]tcp`.
///
/// Returns [`DefangError::InvalidInput`] for inputs shorter than two characters.
pub fn defang(scheme: &str) -> Result<String> {
    defang_with_rule(scheme).map(|(_, out)| out)
}

/// Replace the characters at `positions` with [`MARKER`].
///
/// If every targeted character already is the marker the substitution would
/// be a no-op, so those characters are bracket-wrapped instead
/// (`hxxp` -> `hx[x]p`).
fn mark_positions(s: &str, positions: &[usize]) -> String {
    let chars: Vec<char> = s.chars().collect();
    let targeted = |i: usize| positions.contains(&i);
    let changes = positions
        .iter()
        .any(|&p| chars.get(p).is_some_and(|&c| c != MARKER));

    let mut out = String::with_capacity(s.len() + 2 * positions.len());
    for (i, &c) in chars.iter().enumerate() {
        if !targeted(i) {
            out.push(c);
        } else if changes {
            out.push(MARKER);
        } else {
            out.push('[');
            out.push(c);
            out.push(']');
        }
    }
    out
}

fn wrap_reserved_runs(s: &str) -> String {
    RE_RESERVED_RUN
        .replace_all(s, |caps: &regex::Captures| format!("[{}]", &caps[0]))
        .into_owned()
}

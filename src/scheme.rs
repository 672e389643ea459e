//! Scheme registry records and derived defang results.

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::defang::defang;
use crate::error::{DefangError, Result};
use crate::patterns::RE_SCHEME;

/// Standardisation status of a registered scheme (RFC 7595).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "python-ext", pyclass(eq, eq_int))]
pub enum Status {
    Permanent,
    Provisional,
    Historical,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Permanent => "Permanent",
            Status::Provisional => "Provisional",
            Status::Historical => "Historical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DefangError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Permanent" => Ok(Status::Permanent),
            "Provisional" => Ok(Status::Provisional),
            "Historical" => Ok(Status::Historical),
            other => Err(DefangError::InvalidStatus(other.to_string())),
        }
    }
}

/// A registered scheme name and its status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub name: String,
    pub status: Status,
}

impl SchemeRecord {
    /// Build a record, rejecting names outside the lowercase scheme grammar.
    pub fn new(name: impl Into<String>, status: Status) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, status })
    }

    pub fn defanged(&self) -> Result<DefangResult> {
        DefangResult::compute(&self.name)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DefangError::InvalidScheme {
            scheme: name.to_string(),
            reason: "scheme name is empty".to_string(),
        });
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(DefangError::InvalidScheme {
            scheme: name.to_string(),
            reason: "scheme name must be lowercase".to_string(),
        });
    }
    if !RE_SCHEME.is_match(name) {
        return Err(DefangError::InvalidScheme {
            scheme: name.to_string(),
            reason: "scheme name must match ALPHA *( ALPHA / DIGIT / \"+\" / \"-\" / \".\" )"
                .to_string(),
        });
    }
    Ok(())
}

/// A scheme paired with its defanged rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefangResult {
    pub original: String,
    pub defanged: String,
}

impl DefangResult {
    pub fn compute(original: &str) -> Result<Self> {
        Ok(Self {
            original: original.to_string(),
            defanged: defang(original)?,
        })
    }
}

impl fmt::Display for DefangResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original, self.defanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_labels() {
        for status in [Status::Permanent, Status::Provisional, Status::Historical] {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert!(matches!(
            "Obsolete".parse::<Status>(),
            Err(DefangError::InvalidStatus(s)) if s == "Obsolete"
        ));
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&Status::Provisional).unwrap();
        assert_eq!(json, "\"Provisional\"");
    }

    #[test]
    fn record_rejects_bad_names() {
        assert!(SchemeRecord::new("coap+tcp", Status::Permanent).is_ok());
        assert!(SchemeRecord::new("", Status::Permanent).is_err());
        assert!(SchemeRecord::new("HTTP", Status::Permanent).is_err());
        assert!(SchemeRecord::new("shttp (OBSOLETE)", Status::Permanent).is_err());
    }

    #[test]
    fn record_defanged_pairs_name() {
        let rec = SchemeRecord::new("https", Status::Permanent).unwrap();
        let res = rec.defanged().unwrap();
        assert_eq!(res.original, "https");
        assert_eq!(res.defanged, "hxxps");
        assert_eq!(res.to_string(), "https -> hxxps");
    }
}

//! Configuration for registry verification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::scheme::Status;

/// Schemes allowed to collide because `hxxp[s]` is itself registered.
pub const HTTP_CONVENTION_SCHEMES: [&str; 4] = ["http", "https", "hxxp", "hxxps"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Violations whose schemes all fall in this set are downgraded to a warning
    pub exempt_schemes: BTreeSet<String>,
    /// Only verify records with this status (None = all records)
    pub status_filter: Option<Status>,
    /// Emit the exemption warning through tracing (it is always in the report)
    pub warn_on_exemption: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            exempt_schemes: HTTP_CONVENTION_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            status_filter: None,
            warn_on_exemption: true,
        }
    }
}

impl VerifyConfig {
    /// No exemptions; every violation is fatal.
    pub fn strict() -> Self {
        Self {
            exempt_schemes: BTreeSet::new(),
            ..Self::default()
        }
    }

    pub fn permanent_only() -> Self {
        Self {
            status_filter: Some(Status::Permanent),
            ..Self::default()
        }
    }

    pub fn is_exempt(&self, scheme: &str) -> bool {
        self.exempt_schemes.contains(scheme)
    }
}

//! Registry verification for the defang rule set.
//!
//! Two global properties must hold over a registry:
//! - no defanged scheme is itself a registered scheme (non-collision)
//! - no two schemes defang to the same string (one-to-one), so a defanged
//!   label maps back to exactly one registered scheme
//!
//! `http`/`https` defang to `hxxp`/`hxxps`, which are registered provisional
//! schemes. Violations whose schemes all fall in the configured exemption
//! set are reported as a single warning instead of failing verification.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::VerifyConfig;
use crate::error::{Result, VerificationFailure};
use crate::scheme::{DefangResult, SchemeRecord};

/// A breach of one of the registry-wide properties.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Violation {
    #[error("Defanged scheme \"{defanged}\" is still a valid scheme (defanged from \"{original}\")")]
    RegistryCollision { original: String, defanged: String },

    #[error(
        "Defanged scheme \"{defanged}\" is duplicated, meaning that re-fanging would be ambiguous due to the following offenders: {}",
        .offenders.join(", ")
    )]
    RegistryAmbiguity {
        defanged: String,
        offenders: Vec<String>,
    },
}

impl Violation {
    /// Registered schemes involved in this violation.
    pub fn schemes(&self) -> Vec<&str> {
        match self {
            // The defanged string is a registered name here
            Violation::RegistryCollision { original, defanged } => {
                vec![original.as_str(), defanged.as_str()]
            }
            Violation::RegistryAmbiguity { offenders, .. } => {
                offenders.iter().map(String::as_str).collect()
            }
        }
    }

    pub fn defanged(&self) -> &str {
        match self {
            Violation::RegistryCollision { defanged, .. }
            | Violation::RegistryAmbiguity { defanged, .. } => defanged,
        }
    }
}

/// Non-fatal findings; at most one entry per kind per pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifyWarning {
    ExemptedConvention { count: usize },
}

impl fmt::Display for VerifyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyWarning::ExemptedConvention { count } => write!(
                f,
                "HTTP[S] defangs into HXXP[S], which are registered (provisional) schemes; \
                 allowing {} exempted violation(s) of this common convention",
                count
            ),
        }
    }
}

/// Outcome of a successful verification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Number of records checked after status filtering
    pub checked: usize,
    /// Scheme/defanged pairs in input order
    pub pairs: Vec<DefangResult>,
    pub warnings: Vec<VerifyWarning>,
    /// Violations downgraded by the exemption set
    pub exempted: Vec<Violation>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.exempted.is_empty()
    }
}

/// Verify `records` with the default configuration.
pub fn verify(records: &[SchemeRecord]) -> Result<VerificationReport> {
    verify_with_config(records, &VerifyConfig::default())
}

/// Defang every record and check the non-collision and one-to-one properties.
///
/// All fatal violations are collected before returning, so a failing
/// registry reports every offending scheme in one pass. Records shorter
/// than two characters fail immediately with `InvalidInput`.
pub fn verify_with_config(
    records: &[SchemeRecord],
    cfg: &VerifyConfig,
) -> Result<VerificationReport> {
    let selected: Vec<&SchemeRecord> = records
        .iter()
        .filter(|r| cfg.status_filter.map_or(true, |s| r.status == s))
        .collect();

    let pairs = selected
        .iter()
        .map(|r| r.defanged())
        .collect::<Result<Vec<_>>>()?;

    let mut sink = ViolationSink::new(cfg);

    info!(
        schemes = pairs.len(),
        "Checking that the defang algorithm does not produce any valid schemes"
    );
    let names: HashSet<&str> = selected.iter().map(|r| r.name.as_str()).collect();
    for p in &pairs {
        if names.contains(p.defanged.as_str()) {
            sink.push(Violation::RegistryCollision {
                original: p.original.clone(),
                defanged: p.defanged.clone(),
            });
        }
    }

    info!("Checking that the defang algorithm is one-to-one");
    let mut seen: HashSet<&str> = HashSet::with_capacity(pairs.len());
    let mut reported: HashSet<&str> = HashSet::new();
    for p in &pairs {
        let d = p.defanged.as_str();
        if !seen.insert(d) && reported.insert(d) {
            let offenders = pairs
                .iter()
                .filter(|q| q.defanged == d)
                .map(|q| q.original.clone())
                .collect();
            sink.push(Violation::RegistryAmbiguity {
                defanged: d.to_string(),
                offenders,
            });
        }
    }

    let (fatal, exempted) = sink.finish();
    if !fatal.is_empty() {
        error!(
            violations = fatal.len(),
            "Defang rule set failed registry verification"
        );
        return Err(VerificationFailure { violations: fatal }.into());
    }

    let mut warnings = Vec::new();
    if !exempted.is_empty() {
        let w = VerifyWarning::ExemptedConvention {
            count: exempted.len(),
        };
        if cfg.warn_on_exemption {
            warn!("{}", w);
        }
        warnings.push(w);
    }

    info!(schemes = pairs.len(), "Defang rule set verified");
    Ok(VerificationReport {
        checked: pairs.len(),
        pairs,
        warnings,
        exempted,
    })
}

struct ViolationSink<'c> {
    cfg: &'c VerifyConfig,
    fatal: Vec<Violation>,
    exempted: Vec<Violation>,
}

impl<'c> ViolationSink<'c> {
    fn new(cfg: &'c VerifyConfig) -> Self {
        Self {
            cfg,
            fatal: Vec::new(),
            exempted: Vec::new(),
        }
    }

    fn push(&mut self, v: Violation) {
        if v.schemes().iter().all(|s| self.cfg.is_exempt(s)) {
            self.exempted.push(v);
        } else {
            error!("{}", v);
            self.fatal.push(v);
        }
    }

    fn finish(self) -> (Vec<Violation>, Vec<Violation>) {
        (self.fatal, self.exempted)
    }
}

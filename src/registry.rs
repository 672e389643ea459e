//! Immutable scheme registry and reverse (refang) lookup.
//!
//! The registry is plain data: callers build it once from whatever source
//! they load (a cached JSON dump, a test fixture) and pass it by reference.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::error::{DefangError, Result};
use crate::scheme::{validate_name, DefangResult, SchemeRecord, Status};
use crate::verify::{verify_with_config, VerificationReport};

/// Set of registered schemes, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SchemeRecord>", into = "Vec<SchemeRecord>")]
pub struct Registry {
    records: Vec<SchemeRecord>,
}

impl Registry {
    /// Build a registry; names must be valid and unique.
    pub fn new<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = SchemeRecord>,
    {
        let mut records: Vec<SchemeRecord> = records.into_iter().collect();
        for r in &records {
            validate_name(&r.name)?;
        }
        records.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(w) = records.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(DefangError::DuplicateScheme(w[0].name.clone()));
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of `{ "name": .., "status": .. }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<SchemeRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a cached registry dump from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let registry = Self::from_json_str(&json)?;
        info!(path = %path.display(), schemes = registry.len(), "Loaded scheme registry");
        Ok(registry)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemeRecord> {
        self.records.iter()
    }

    pub fn get(&self, name: &str) -> Option<&SchemeRecord> {
        self.records
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sub-registry of records with the given status.
    pub fn with_status(&self, status: Status) -> Registry {
        Registry {
            records: self
                .records
                .iter()
                .filter(|r| r.status == status)
                .cloned()
                .collect(),
        }
    }

    /// `(scheme, defanged)` pairs in name order.
    pub fn defanged_pairs(&self) -> Result<Vec<DefangResult>> {
        self.records.iter().map(SchemeRecord::defanged).collect()
    }

    pub fn verify(&self, cfg: &VerifyConfig) -> Result<VerificationReport> {
        verify_with_config(&self.records, cfg)
    }

    /// Build the reverse lookup, verifying the registry with the default config.
    pub fn refang_table(&self) -> Result<RefangTable> {
        self.refang_table_with_config(&VerifyConfig::default())
    }

    pub fn refang_table_with_config(&self, cfg: &VerifyConfig) -> Result<RefangTable> {
        let report = self.verify(cfg)?;
        Ok(RefangTable::from_pairs(report.pairs))
    }
}

impl TryFrom<Vec<SchemeRecord>> for Registry {
    type Error = DefangError;

    fn try_from(records: Vec<SchemeRecord>) -> Result<Self> {
        Self::new(records)
    }
}

impl From<Registry> for Vec<SchemeRecord> {
    fn from(registry: Registry) -> Self {
        registry.records
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SchemeRecord;
    type IntoIter = std::slice::Iter<'a, SchemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Defanged label -> original scheme, valid for one verified registry.
#[derive(Debug, Clone, Default)]
pub struct RefangTable {
    map: HashMap<String, String>,
}

impl RefangTable {
    fn from_pairs(pairs: Vec<DefangResult>) -> Self {
        let mut map = HashMap::with_capacity(pairs.len());
        for p in pairs {
            // Only exempted ambiguities reach here; keep the first scheme in name order
            map.entry(p.defanged).or_insert(p.original);
        }
        debug!(entries = map.len(), "Built refang table");
        Self { map }
    }

    /// Original scheme for a defanged label, if registered.
    pub fn refang(&self, defanged: &str) -> Option<&str> {
        self.map.get(defanged).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

//! Reversible-by-lookup defanging of URI scheme labels.
//!
//! `https` becomes `hxxps`, `coap+tcp` becomes `coap[+]tcp`, and so on, so
//! that security tooling can display URIs that will not be auto-linked.
//! [`verify`] checks a scheme registry to make sure no defanged label is a
//! live scheme and that each defanged label maps back to one scheme.

pub mod config;
pub mod defang;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod registry;
pub mod scheme;
pub mod verify;

#[cfg(feature = "python-ext")]
mod python_bindings;

pub use config::VerifyConfig;
pub use defang::{defang, RuleKind};
pub use error::{DefangError, Result};
pub use registry::{RefangTable, Registry};
pub use scheme::{DefangResult, SchemeRecord, Status};
pub use verify::{verify, verify_with_config, VerificationReport, Violation, VerifyWarning};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn defang_schemes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_schemes_bindings(m.py(), m)
}

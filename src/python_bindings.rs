//! Python bindings for scheme defanging.
//!
//! Exposed under a `schemes` submodule so a Python IOC library can defang
//! and refang scheme labels without embedding a generated lookup table.

use pyo3::prelude::*;

use crate::registry::Registry;
use crate::scheme::{SchemeRecord, Status};

/// Register scheme-related Python bindings.
pub fn register_schemes_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let schemes_mod = pyo3::types::PyModule::new(py, "schemes")?;

    schemes_mod.add_class::<Status>()?;
    schemes_mod.add_function(wrap_pyfunction!(defang_py, &schemes_mod)?)?;
    schemes_mod.add_function(wrap_pyfunction!(defang_uri_py, &schemes_mod)?)?;
    schemes_mod.add_function(wrap_pyfunction!(verify_py, &schemes_mod)?)?;
    schemes_mod.add_function(wrap_pyfunction!(refang_py, &schemes_mod)?)?;
    schemes_mod.add_function(wrap_pyfunction!(crate::logging::init_logging, &schemes_mod)?)?;

    m.add_submodule(&schemes_mod)?;
    Ok(())
}

fn registry_from(schemes: Vec<(String, Status)>) -> PyResult<Registry> {
    let records = schemes
        .into_iter()
        .map(|(name, status)| SchemeRecord::new(name, status))
        .collect::<crate::error::Result<Vec<_>>>()?;
    Ok(Registry::new(records)?)
}

/// Defang a single scheme token.
#[pyfunction]
#[pyo3(name = "defang")]
fn defang_py(scheme: &str) -> PyResult<String> {
    Ok(crate::defang::defang(scheme)?)
}

/// Defang the scheme label at the start of a URI.
#[pyfunction]
#[pyo3(name = "defang_uri")]
fn defang_uri_py(text: &str) -> String {
    crate::defang::uri::defang_uri(text).into_owned()
}

/// Verify a registry given as `(name, status)` pairs; returns `(scheme, defanged)` pairs.
#[pyfunction]
#[pyo3(name = "verify")]
#[pyo3(signature = (schemes, permanent_only=false))]
fn verify_py(
    schemes: Vec<(String, Status)>,
    permanent_only: bool,
) -> PyResult<Vec<(String, String)>> {
    let registry = registry_from(schemes)?;
    let cfg = if permanent_only {
        crate::config::VerifyConfig::permanent_only()
    } else {
        crate::config::VerifyConfig::default()
    };
    let report = registry.verify(&cfg)?;
    Ok(report
        .pairs
        .into_iter()
        .map(|p| (p.original, p.defanged))
        .collect())
}

/// Recover the original scheme for a defanged label.
#[pyfunction]
#[pyo3(name = "refang")]
fn refang_py(defanged: &str, schemes: Vec<(String, Status)>) -> PyResult<Option<String>> {
    let table = registry_from(schemes)?.refang_table()?;
    Ok(table.refang(defanged).map(str::to_string))
}

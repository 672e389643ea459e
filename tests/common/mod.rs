//! Common test utilities and helpers.

use std::path::{Path, PathBuf};

use defang_schemes::Registry;

/// Snapshot of the IANA registry: every permanent scheme plus a sample of
/// provisional and historical ones.
pub const IANA_SUBSET: &str = "registry/iana_subset.json";

/// Get the full path to a sample file
pub fn sample_file_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(relative_path)
}

/// Load the IANA snapshot.
pub fn iana_registry() -> Registry {
    Registry::load(sample_file_path(IANA_SUBSET)).expect("IANA snapshot loads")
}

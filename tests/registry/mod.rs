//! Registry-level tests over the IANA snapshot.

mod iana_snapshot;
mod loading;
mod refang;

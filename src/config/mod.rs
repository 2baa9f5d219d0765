//! Configuration for dompet-core
//!
//! Currently limited to storage path resolution; the data layer has no other
//! tunables.

pub mod paths;

pub use paths::StorePaths;

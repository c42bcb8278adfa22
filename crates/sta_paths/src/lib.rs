//! Critical-path extraction: single worst path and k edge-disjoint paths.

#![warn(missing_docs)]

pub mod k_path;
pub mod path;

pub use k_path::extract_k_critical_paths;
pub use path::{extract_single_critical_path, CriticalPath};

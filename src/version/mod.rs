//! Go module version handling
//!
//! This module provides:
//! - Version extraction and classification from versioned paths
//! - Date decoding for pseudo-versions

mod classifier;
mod pseudo;

pub use classifier::{
    classify, extract_version, VersionDescriptor, INCOMPATIBLE_MARKER, PSEUDO_BASE_SENTINEL,
};
pub use pseudo::decode;

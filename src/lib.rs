//! gostamp - Go binary build timestamp estimator library
//!
//! This library estimates the earliest moment a Go binary could have been
//! built, from the versions of the dependencies embedded in it:
//! - Pseudo-versions carry their commit date
//! - Tagged releases on the forge carry the date of the tagged commit

pub mod aggregator;
pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod forge;
pub mod logging;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod version;

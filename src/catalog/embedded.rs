//! Embedded catalog
//!
//! The default catalog compiled into the binary.

/// Default catalog document (JSON)
pub const DEFAULT_CATALOG: &str = include_str!("../../data/catalog.json");

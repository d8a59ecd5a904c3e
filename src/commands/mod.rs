//! Command implementations

pub mod catalog;
pub mod share;
pub mod simple;
pub mod stats;

pub use catalog::{check_catalog, load_catalog};
pub use share::share_today;
pub use simple::{LineCommand, drag_slot, parse_command, run_simple};
pub use stats::show_stats;

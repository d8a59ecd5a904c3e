//! Terminal output formatting
//!
//! Display utilities for line-mode results, pretty-printing and the clipboard.

pub mod clipboard;
pub mod display;
pub mod formatters;

pub use clipboard::{ShareNotice, copy_to_clipboard};
pub use display::{
    print_board, print_catalog_summary, print_guess_result, print_share, print_stats,
};

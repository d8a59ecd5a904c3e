//! Core domain types for the daily puzzle
//!
//! Orders, the event log, day rotation and share rendering. Everything here is
//! pure and independent of storage and terminal handling.

mod day;
mod event;
mod order;
mod share;

pub use day::{
    Clock, FixedClock, SystemClock, date_key, day_index_on, parse_date_key, resolve_day_index,
};
pub use event::{EventKind, decode_log, encode_log};
pub use order::{Order, OrderError};
pub use share::{render, render_tokens, share_text};

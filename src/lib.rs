//! Draggin
//!
//! A daily word-ordering puzzle: drag the day's words into the one correct
//! sequence, using as few drags, guesses and hints as you can.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use draggin::catalog::load_from_str;
//! use draggin::config::GameOptions;
//! use draggin::core::FixedClock;
//! use draggin::session::open;
//! use draggin::store::MemoryStore;
//!
//! let catalog = load_from_str(r#"{
//!     "version": "1",
//!     "start_date": "2024-01-01",
//!     "days": [{ "words": ["b", "a"], "final_order": ["a", "b"], "hints": ["A to Z"] }],
//!     "win_messages": ["Nice!"]
//! }"#).unwrap();
//!
//! let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
//! let mut session = open(&catalog, MemoryStore::new(), &clock, GameOptions::default()).unwrap();
//!
//! session.apply_reorder(&[1, 0]).unwrap();
//! assert!(session.submit_guess().unwrap().correct);
//! assert_eq!(session.share_text(), "ctatz.com/draggin - Day 0\n👆🎉");
//! ```

// Core domain types
pub mod core;

// Daily puzzle definitions
pub mod catalog;

// Persistence
pub mod store;

// Game state machine
pub mod session;

// Front-end options
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

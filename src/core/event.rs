//! Gameplay event log
//!
//! Events are recorded in the order they happen and only feed the share
//! summary. At rest the log is a string of tokens each followed by a comma
//! (`"drag,try,solved,"`); in memory it is a typed sequence.

use std::fmt;

/// One recorded gameplay action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Drag,
    Try,
    Hint,
    Solved,
}

impl EventKind {
    pub const ALL: [Self; 4] = [Self::Drag, Self::Try, Self::Hint, Self::Solved];

    /// Token used in the persisted log
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Try => "try",
            Self::Hint => "hint",
            Self::Solved => "solved",
        }
    }

    /// Parse a persisted token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }

    /// Glyph used in the share summary
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Drag => '👆',
            Self::Try => '❌',
            Self::Hint => '🔎',
            Self::Solved => '🎉',
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Encode a log in the persisted token format
///
/// # Examples
/// ```
/// use draggin::core::{EventKind, encode_log};
///
/// assert_eq!(encode_log(&[EventKind::Drag, EventKind::Solved]), "drag,solved,");
/// assert_eq!(encode_log(&[]), "");
/// ```
#[must_use]
pub fn encode_log(events: &[EventKind]) -> String {
    events.iter().fold(String::new(), |mut out, event| {
        out.push_str(event.token());
        out.push(',');
        out
    })
}

/// Decode a persisted log, skipping empty and unknown tokens
#[must_use]
pub fn decode_log(raw: &str) -> Vec<EventKind> {
    raw.split(',')
        .map(str::trim)
        .filter_map(EventKind::from_token)
        .collect()
}

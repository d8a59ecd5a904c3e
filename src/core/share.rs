//! Share summary rendering
//!
//! Turns the day's event log into the compact emoji string players paste
//! elsewhere. Pure functions: the same log always renders the same text.

use super::event::{EventKind, decode_log};

/// Render an event log as glyphs, in log order, without separators
///
/// # Examples
/// ```
/// use draggin::core::{EventKind, render};
///
/// let summary = render(&[EventKind::Drag, EventKind::Try, EventKind::Solved]);
/// assert_eq!(summary, "👆❌🎉");
/// ```
#[must_use]
pub fn render(events: &[EventKind]) -> String {
    events.iter().map(|event| event.glyph()).collect()
}

/// Render a raw persisted log string, skipping tokens that do not parse
#[must_use]
pub fn render_tokens(raw: &str) -> String {
    render(&decode_log(raw))
}

/// Full clipboard text: `"<site>/<name> - Day <day>\n<summary>"`
#[must_use]
pub fn share_text(site: &str, name: &str, day: usize, events: &[EventKind]) -> String {
    format!("{site}/{name} - Day {day}\n{}", render(events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let log = [EventKind::Drag, EventKind::Try, EventKind::Solved];
        let first = render(&log);
        for _ in 0..3 {
            assert_eq!(render(&log), first);
        }
        assert_eq!(first, "👆❌🎉");
    }

    #[test]
    fn render_empty_log() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn render_tokens_skips_unknown() {
        assert_eq!(render_tokens("hint,wiggle,drag,solved,"), "🔎👆🎉");
    }

    #[test]
    fn share_text_layout() {
        let text = share_text("ctatz.com", "draggin", 12, &[EventKind::Hint, EventKind::Solved]);
        assert_eq!(text, "ctatz.com/draggin - Day 12\n🔎🎉");
    }
}

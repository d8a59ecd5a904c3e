//! Formatting utilities for terminal output

use crate::store::SessionState;

/// Label on the control that reveals hint `index` (0-based)
#[must_use]
pub fn hint_label(index: usize) -> String {
    if index == 0 {
        "Show Hint".to_string()
    } else {
        format!("Show Hint {}", index + 1)
    }
}

/// `"Drags 3 Guesses 1"`
#[must_use]
pub fn counters_line(state: &SessionState) -> String {
    format!("Drags {} Guesses {}", state.drags, state.tries)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Numbered rows for line-mode display, marking flagged slots
#[must_use]
pub fn board_lines(words: &[&str], flagged: &std::collections::BTreeSet<usize>) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(slot, word)| {
            let mark = if flagged.contains(&slot) { "✗" } else { " " };
            format!("{mark} {}. {word}", slot + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn hint_labels_number_after_first() {
        assert_eq!(hint_label(0), "Show Hint");
        assert_eq!(hint_label(1), "Show Hint 2");
    }

    #[test]
    fn counters() {
        let state = SessionState {
            drags: 3,
            tries: 1,
            ..SessionState::default()
        };
        assert_eq!(counters_line(&state), "Drags 3 Guesses 1");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn board_marks_flagged_slots() {
        let lines = board_lines(&["red", "blue"], &BTreeSet::from([1]));
        assert_eq!(lines, vec!["  1. red".to_string(), "✗ 2. blue".to_string()]);
    }
}

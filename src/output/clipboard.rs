//! Clipboard output
//!
//! Copies through the terminal with an OSC 52 escape sequence, so it works
//! over SSH and without a desktop clipboard daemon. Terminals that ignore
//! OSC 52 silently drop the text; a write error is the only failure we can
//! observe.

use crossterm::{clipboard::CopyToClipboard, execute};
use std::io::{self, Write};

/// Notice shown after a share attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareNotice {
    Copied,
    Failed(String),
}

impl ShareNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Copied => "Copied share text to clipboard! Thanks for playing!".to_string(),
            Self::Failed(reason) => format!("Could not copy to clipboard ({reason})"),
        }
    }
}

/// Copy `text` to the clipboard via `out`
pub fn copy_with<W: Write>(out: &mut W, text: &str) -> ShareNotice {
    match execute!(out, CopyToClipboard::to_clipboard_from(text)) {
        Ok(()) => ShareNotice::Copied,
        Err(err) => {
            tracing::warn!(%err, "clipboard write failed");
            ShareNotice::Failed(err.to_string())
        }
    }
}

/// Copy `text` to the clipboard through stdout
#[must_use]
pub fn copy_to_clipboard(text: &str) -> ShareNotice {
    copy_with(&mut io::stdout(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn copy_emits_escape_sequence() {
        let mut out = Vec::new();
        assert_eq!(copy_with(&mut out, "hi"), ShareNotice::Copied);
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]52;"));
    }

    #[test]
    fn write_failure_is_a_notice() {
        let notice = copy_with(&mut Broken, "hi");
        assert!(matches!(notice, ShareNotice::Failed(_)));
        assert!(notice.message().contains("terminal gone"));
    }
}

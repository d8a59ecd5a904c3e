//! Game options
//!
//! Everything a front-end can tune without touching the catalog.

/// Default share site
pub const DEFAULT_SITE: &str = "ctatz.com";

/// Default puzzle name used in the share header
pub const DEFAULT_PUZZLE_NAME: &str = "draggin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Report which slots are wrong after a failed guess
    pub show_incorrect_guesses: bool,
    pub site: String,
    pub puzzle_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            show_incorrect_guesses: false,
            site: DEFAULT_SITE.to_string(),
            puzzle_name: DEFAULT_PUZZLE_NAME.to_string(),
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn with_incorrect_guesses(mut self, enable: bool) -> Self {
        self.show_incorrect_guesses = enable;
        self
    }

    #[must_use]
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    #[must_use]
    pub fn with_puzzle_name(mut self, name: impl Into<String>) -> Self {
        self.puzzle_name = name.into();
        self
    }
}

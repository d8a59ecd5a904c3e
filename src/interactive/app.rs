//! TUI application state and logic

use crate::output::{ShareNotice, copy_to_clipboard};
use crate::session::{
    DragUpdate, ListSurface, PlayStats, PuzzleSession, ReorderSurface, SessionError, Status,
};
use crate::store::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Word currently held by the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    /// Item index into the day's words
    pub item: usize,
    /// Slot the item was picked up from
    pub from: usize,
    /// Screen row of the pointer when the grab started (mouse only)
    pub anchor_row: Option<u16>,
    /// Rows moved since pick-up
    pub displacement: f32,
}

/// Application state
pub struct App<S> {
    pub session: PuzzleSession<S>,
    pub surface: ListSurface,
    /// Highlighted slot
    pub selected: usize,
    pub grab: Option<Grab>,
    pub messages: Vec<Message>,
    pub stats: PlayStats,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: PuzzleSession<S>) -> Self {
        let surface = ListSurface::new(session.definition().len(), Some(session.order()));
        let stats = PlayStats::from_priors(&session.state().prior_days, session.today());
        let solved = session.status() == Status::Solved;

        let mut app = Self {
            session,
            surface,
            selected: 0,
            grab: None,
            messages: Vec::new(),
            stats,
            show_help: false,
            should_quit: false,
        };

        if solved {
            let message = app.session.win_message().to_string();
            app.add_message(&message, MessageStyle::Success);
            app.add_message("Press 's' to copy your result.", MessageStyle::Info);
        } else {
            app.add_message(
                "Drag individual words into their correct order.",
                MessageStyle::Info,
            );
            app.add_message(
                "Space picks a word up and puts it down. Enter submits. ? for help.",
                MessageStyle::Info,
            );
        }
        app
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.surface.item_count()
    }

    /// Words as they should be drawn, with any held word at its landing slot
    #[must_use]
    pub fn preview_words(&self) -> Vec<&str> {
        self.surface.preview().arrange(&self.session.definition().words)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.session.status() == Status::Solved
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }

        if let Some(grab) = self.grab {
            let displacement = grab.displacement + delta as f32;
            let low = -(grab.from as f32);
            let high = (count - 1 - grab.from) as f32;
            self.drag_to(displacement.clamp(low, high));
        } else {
            self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
        }
    }

    /// Pick up the word in `slot`
    pub fn begin_drag(&mut self, slot: usize, anchor_row: Option<u16>) {
        if self.is_solved() {
            return;
        }
        let Some(&item) = self.surface.order().as_slice().get(slot) else {
            return;
        };

        self.selected = slot;
        self.grab = Some(Grab {
            item,
            from: slot,
            anchor_row,
            displacement: 0.0,
        });
        self.surface.drag(DragUpdate::moving(item, 0.0));
    }

    /// Move the held word to `displacement` rows from where it was picked up
    pub fn drag_to(&mut self, displacement: f32) {
        let Some(grab) = self.grab.as_mut() else {
            return;
        };
        grab.displacement = displacement;
        let update = DragUpdate::moving(grab.item, displacement);

        self.surface.drag(update);
        if let Some(slot) = self.surface.preview().slot_of(update.item) {
            self.selected = slot;
        }
    }

    /// Put the held word down and hand the settled order to the session
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot persist the new order.
    pub fn end_drag(&mut self) -> Result<(), SessionError> {
        let Some(grab) = self.grab.take() else {
            return Ok(());
        };

        let settled = self
            .surface
            .drag(DragUpdate::release(grab.item, grab.displacement));
        if let Some(order) = settled {
            self.session.apply_reorder(order.as_slice())?;
        }

        // The session is the source of truth; a no-op drop must not desync
        let current = self.session.order();
        self.selected = current.slot_of(grab.item).unwrap_or(self.selected);
        self.surface.reset(current);
        Ok(())
    }

    /// Drop the held word back where it came from
    pub fn cancel_drag(&mut self) {
        if let Some(grab) = self.grab.take() {
            self.selected = grab.from;
            self.surface.reset(self.session.order());
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot persist the drop.
    pub fn toggle_grab(&mut self) -> Result<(), SessionError> {
        if self.grab.is_some() {
            self.end_drag()
        } else {
            self.begin_drag(self.selected, None);
            Ok(())
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot persist the guess.
    pub fn submit_guess(&mut self) -> Result<(), SessionError> {
        self.end_drag()?;
        if self.is_solved() {
            self.add_message("Already solved. Press 's' to share.", MessageStyle::Info);
            return Ok(());
        }

        let outcome = self.session.submit_guess()?;
        if outcome.correct {
            let state = self.session.state();
            self.stats = PlayStats::from_priors(&state.prior_days, self.session.today());
            let message = self.session.win_message().to_string();
            self.add_message(&message, MessageStyle::Success);
            self.add_message("Press 's' to copy your result.", MessageStyle::Info);
        } else if self.session.options().show_incorrect_guesses {
            let wrong = self.session.wrong_positions().len();
            let noun = if wrong == 1 { "word is" } else { "words are" };
            self.add_message(
                &format!("Not quite! {wrong} {noun} out of place."),
                MessageStyle::Error,
            );
        } else {
            self.add_message("Not quite! Keep dragging.", MessageStyle::Error);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot persist the hint.
    pub fn request_hint(&mut self) -> Result<(), SessionError> {
        if self.is_solved() {
            return Ok(());
        }
        if self.session.hints_remaining() == 0 {
            self.add_message("No more hints today.", MessageStyle::Error);
            return Ok(());
        }

        self.session.request_hint()?;
        if let Some(hint) = self.session.revealed_hints().last() {
            let text = format!("Hint: {hint}");
            self.add_message(&text, MessageStyle::Info);
        }
        Ok(())
    }

    pub fn share(&mut self) {
        let notice = copy_to_clipboard(&self.session.share_text());
        let style = match &notice {
            ShareNotice::Copied => MessageStyle::Success,
            ShareNotice::Failed(_) => MessageStyle::Error,
        };
        self.add_message(&notice.message(), style);
    }

    /// # Errors
    ///
    /// Returns `SessionError` if an action cannot be persisted.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cancel_drag();
                self.should_quit = true;
            }
            KeyCode::Char('q') => {
                self.cancel_drag();
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char(' ') => self.toggle_grab()?,
            KeyCode::Esc => self.cancel_drag(),
            KeyCode::Enter => self.submit_guess()?,
            KeyCode::Char('h') => self.request_hint()?,
            KeyCode::Char('s') => self.share(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle a pointer event; `rows` is the screen area holding the word list
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if a drop cannot be persisted.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, rows: Rect) -> Result<(), SessionError> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = mouse.column >= rows.x
                    && mouse.column < rows.x + rows.width
                    && mouse.row >= rows.y
                    && mouse.row < rows.y + rows.height;
                let slot = usize::from(mouse.row.saturating_sub(rows.y));
                if inside && slot < self.item_count() {
                    self.cancel_drag();
                    self.begin_drag(slot, Some(mouse.row));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(anchor) = self.grab.and_then(|g| g.anchor_row) {
                    self.drag_to(f32::from(mouse.row) - f32::from(anchor));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.grab.is_some_and(|g| g.anchor_row.is_some()) {
                    self.end_drag()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key)?,
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                app.handle_mouse(mouse, super::rendering::word_rows(screen))?;
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    tracing::debug!("leaving interactive mode");
    Ok(())
}

//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::output::formatters::{counters_line, create_progress_bar, hint_label};
use crate::session::ReorderSurface;
use crate::store::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

struct Areas {
    header: Rect,
    board: Rect,
    side: Rect,
    messages: Rect,
    status: Rect,
}

fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    Areas {
        header: chunks[0],
        board: main_chunks[0],
        side: main_chunks[1],
        messages: chunks[2],
        status: chunks[3],
    }
}

fn board_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen rows occupied by the word list, one row per slot
#[must_use]
pub fn word_rows(screen: Rect) -> Rect {
    board_block(String::new()).inner(areas(screen).board)
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let screen = f.area();
    let areas = areas(screen);

    render_header(f, areas.header);
    render_board(f, app, areas.board);
    if app.is_solved() {
        render_result(f, app, areas.side);
    } else {
        render_side_panel(f, app, areas.side);
    }
    render_messages(f, app, areas.messages);
    render_status(f, app, areas.status);

    if app.show_help {
        render_help(f, screen);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Draggin.")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let solved = app.is_solved();
    let held = app.grab.map(|g| g.item);
    let preview = app.surface.preview();
    let words = app.preview_words();
    let wrong = app.session.wrong_positions();

    let items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .map(|(slot, word)| {
            let is_held = held.is_some() && preview.as_slice().get(slot).copied() == held;
            let is_wrong = held.is_none() && wrong.contains(&slot);

            let (marker, mut style) = if solved {
                ("  ", Style::default().fg(Color::Green))
            } else if is_held {
                (
                    "⇅ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_wrong {
                ("✗ ", Style::default().fg(Color::Red))
            } else {
                ("  ", Style::default())
            };
            if slot == app.selected && !solved {
                style = style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:>2}. {word}", slot + 1), style),
            ]))
        })
        .collect();

    let title = format!(" Day {} ", app.session.definition().day_index);
    let border = if solved { Color::Green } else { Color::White };
    let list = List::new(items).block(board_block(title).style(Style::default().fg(border)));
    f.render_widget(list, area);
}

fn render_side_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let state = app.session.state();
    let hint_total = app.session.definition().hints.len();
    let shown = app.session.revealed_hints().len();

    let progress = vec![
        Line::from(counters_line(state)),
        Line::from(format!(
            "Hints [{}] {shown}/{hint_total}",
            create_progress_bar(shown as f64, hint_total as f64, 10)
        )),
        Line::from(app.session.summary()),
    ];
    let progress = Paragraph::new(progress).block(
        Block::default()
            .title(" Progress ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(progress, chunks[0]);

    let mut lines: Vec<Line> = app
        .session
        .revealed_hints()
        .iter()
        .map(|hint| Line::from(format!("• {hint}")))
        .collect();
    if app.session.hints_remaining() > 0 {
        lines.push(Line::from(Span::styled(
            format!("h: {}", hint_label(shown)),
            Style::default().fg(Color::DarkGray),
        )));
    } else if hint_total == 0 {
        lines.push(Line::from("No hints today."));
    }

    let hints = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Hints ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(hints, chunks[1]);
}

fn render_result<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            app.session.win_message().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(counters_line(app.session.state())),
        Line::from(app.session.summary()),
        Line::from(""),
        Line::from("s: copy share text"),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" 🎉 Solved ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let date = Paragraph::new(app.session.today().format("%b %-d, %Y").to_string())
        .alignment(Alignment::Center);
    f.render_widget(date, chunks[0]);

    let stats = &app.stats;
    let played = Paragraph::new(format!(
        "Played: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(played, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        stats.current_streak, stats.best_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.is_solved() {
        "s: Share | q: Quit"
    } else {
        "?: Help | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_help(f: &mut Frame, screen: Rect) {
    let lines = vec![
        Line::from("↑/↓ or k/j   move the cursor"),
        Line::from("space        pick up / put down a word"),
        Line::from("mouse        drag a word with the left button"),
        Line::from("esc          drop the word back"),
        Line::from("enter        submit your order"),
        Line::from("h            reveal the next hint"),
        Line::from("s            copy the share text"),
        Line::from("q            quit (progress is saved)"),
    ];

    let area = centered(screen, 50, lines.len() as u16 + 2);
    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help (? to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_rows_sit_inside_board_border() {
        let screen = Rect::new(0, 0, 80, 30);
        let rows = word_rows(screen);
        // header is 3 rows, board border adds one more
        assert_eq!(rows.y, 4);
        assert_eq!(rows.x, 1);
        assert_eq!(rows.height, 30 - 3 - 7 - 1 - 2);
    }

    #[test]
    fn centered_fits_small_screens() {
        let area = centered(Rect::new(0, 0, 20, 5), 50, 10);
        assert_eq!(area, Rect::new(0, 0, 20, 5));
    }
}

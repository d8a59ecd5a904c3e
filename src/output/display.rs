//! Display functions for command results

use super::clipboard::ShareNotice;
use super::formatters::{board_lines, counters_line, create_progress_bar, hint_label};
use crate::catalog::Catalog;
use crate::core::day_index_on;
use crate::session::{PlayStats, PuzzleSession, Status};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use colored::Colorize;

/// Print the current board with counters, hints and flagged slots
pub fn print_board<S: KeyValueStore>(session: &PuzzleSession<S>) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "{}  {}",
        format!("Day {}", session.definition().day_index)
            .bright_cyan()
            .bold(),
        counters_line(session.state()).bright_black()
    );
    println!("{}", "─".repeat(50).cyan());

    for hint in session.revealed_hints() {
        println!("  🔎 {}", hint.italic());
    }
    if session.hints_remaining() > 0 {
        let next = session.revealed_hints().len();
        println!("  {}", format!("[{}: 'hint']", hint_label(next)).bright_black());
    }
    println!();

    for line in board_lines(&session.display_words(), session.wrong_positions()) {
        if line.starts_with('✗') {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.bright_white());
        }
    }
    println!();
}

/// Print the share block and what happened to the clipboard
pub fn print_share(text: &str, solved: bool, notice: Option<&ShareNotice>) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if solved {
        println!("{}", "    🎉  S O L V E D  🎉".bright_green().bold());
    } else {
        println!("{}", "    Puzzle still in progress".yellow());
    }
    println!("{}", "═".repeat(50).bright_cyan());
    println!("\n{text}\n");

    match notice {
        Some(ShareNotice::Copied) => println!("{}", ShareNotice::Copied.message().green()),
        Some(failed @ ShareNotice::Failed(_)) => println!("{}", failed.message().yellow()),
        None => {}
    }
}

/// Print play history statistics
pub fn print_stats(stats: &PlayStats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "PLAY HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.played);
    println!(
        "   Solved:          {}",
        stats.solved.to_string().bright_green()
    );
    println!(
        "   Win rate:        [{}] {}",
        create_progress_bar(stats.win_rate(), 100.0, 20).green(),
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().bright_yellow().bold()
    );
    println!("   Best streak:     {}", stats.best_streak);
    println!();
}

/// Print a catalog overview
pub fn print_catalog_summary(catalog: &Catalog, today: NaiveDate) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Catalog {} ({} days)",
        catalog.version.bright_yellow().bold(),
        catalog.days.len()
    );
    println!("{}", "─".repeat(50).cyan());
    println!("   Start date:      {}", catalog.start_date);
    println!("   Last puzzle on:  {}", catalog.last_date());
    println!("   Win messages:    {}", catalog.win_messages.len());

    let index = day_index_on(today, catalog.start_date);
    match catalog.day(index) {
        Ok(day) => println!(
            "   Today:           day {} ({} words, {} hints)",
            index,
            day.len(),
            day.hints.len()
        ),
        Err(err) => println!("   Today:           {}", err.to_string().red()),
    }
    println!();
}

/// One-line result after a guess in line mode
pub fn print_guess_result<S: KeyValueStore>(session: &PuzzleSession<S>, correct: bool) {
    if correct {
        println!("\n{}", session.win_message().bright_green().bold());
    } else if session.wrong_positions().is_empty() {
        println!("{}", "❌ Not quite. Keep dragging!".red());
    } else {
        println!(
            "{}",
            format!(
                "❌ Not quite: {} word(s) out of place.",
                session.wrong_positions().len()
            )
            .red()
        );
    }

    if session.status() == Status::Solved {
        println!("{}", session.summary());
    }
}

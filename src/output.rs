//! Plain terminal output for the one-shot CLI commands.
//!
//! The TUI draws the same [`ResultView`] with ratatui widgets; these
//! helpers print it line by line with [`colored`] styling instead.

use colored::Colorize;

use crate::constants::LOADING_NOTICE;
use crate::render::ResultView;

/// Prints a result view to stdout (errors go to stderr).
pub fn print_results(view: &ResultView) {
    match view {
        ResultView::Idle => {}
        ResultView::Loading => println!("{}", LOADING_NOTICE.dimmed()),
        ResultView::Prompts(items) => {
            for (i, item) in items.iter().enumerate() {
                println!("{} {}", format!("{}.", i + 1).cyan().bold(), item.text);
                println!();
            }
        }
        ResultView::Notice(message) => println!("{}", message.yellow()),
        ResultView::Error(message) => print_error(message),
    }
}

/// Prints an error line in the studio's error style.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Prints the header shown before a one-shot generation.
pub fn print_header(provider: &str, model: &str, template: &str) {
    println!(
        "{} [provider: {}] [model: {}] [template: {}]",
        "studio".bold().cyan(),
        provider.yellow(),
        model.yellow(),
        template.yellow(),
    );
    println!();
}

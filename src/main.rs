//! Entry point for prompt-studio, a terminal front-end that turns a keyword
//! into a set of image-prompt variations through an AI proxy.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod catalog;
mod cli;
mod clipboard;
mod config;
mod constants;
mod logging;
mod output;
mod provider;
mod proxy;
mod render;
mod request;
mod store;
mod studio;
mod tui;

use anyhow::Result;

/// Runs the studio CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches the chosen
/// subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    cli::run(cli).await
}

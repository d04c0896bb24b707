//! Command-line interface definition and dispatch for prompt-studio.
//!
//! Uses [`clap`] for argument parsing with derive macros. With no
//! subcommand the interactive studio opens; one-shot generation lives in
//! the [`generate`] submodule and template management in [`templates`].

mod generate;
mod templates;

use crate::{catalog::Catalog, config, logging, provider, tui};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

/// Top-level CLI structure for prompt-studio.
#[derive(Parser)]
#[command(
    name = "studio",
    about = "Generate image-prompt variations through an AI proxy"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive studio (default)
    Tui,
    /// Generate prompt variations for a keyword and print them
    Generate(GenerateArgs),
    /// List available providers and models
    Models,
    /// List templates or print one
    Templates {
        #[command(subcommand)]
        action: Option<TemplateAction>,
    },
    /// Manage the custom system prompt
    Custom {
        #[command(subcommand)]
        action: CustomAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `studio generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// The idea to generate variations of
    pub keyword: Vec<String>,
    /// Provider to use (openai, anthropic, google)
    #[arg(short, long)]
    pub provider: Option<String>,
    /// Model to use (overrides config; accepts provider/model)
    #[arg(short, long)]
    pub model: Option<String>,
    /// System prompt template (see `studio templates`)
    #[arg(short, long)]
    pub template: Option<String>,
    /// Number of variations to request
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
    /// Copy the Nth generated prompt (1-based) to the clipboard
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub copy: Option<u64>,
}

/// Subcommands for `templates`.
#[derive(Subcommand)]
pub enum TemplateAction {
    /// Print a template's full system prompt
    Show { name: String },
}

/// Subcommands for `custom`.
#[derive(Subcommand)]
pub enum CustomAction {
    /// Print the saved custom system prompt
    Show,
    /// Replace the custom system prompt
    Set { text: Vec<String> },
    /// Delete the saved custom system prompt
    Clear,
}

/// Subcommands for the `config` command.
///
/// Controls reading the TOML configuration file stored at the XDG config
/// path (`~/.config/prompt-studio/config.toml`).
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) {
        let log_path = config::Config::cache_dir()?.join(crate::constants::LOG_FILENAME);
        logging::init_file(&log_path)?;
    } else {
        logging::init_stderr();
    }

    match command {
        Commands::Tui => {
            let config = config::Config::load()?;
            tui::run_tui(config).await
        }
        Commands::Generate(args) => generate::run_generate(args).await,
        Commands::Models => {
            let config = config::Config::load()?;
            provider::list_models(&config, &Catalog::builtin())
        }
        Commands::Templates { action } => templates::handle_templates(action),
        Commands::Custom { action } => templates::handle_custom(action),
        Commands::Config { action } => {
            let config = config::Config::load()?;
            match action {
                ConfigAction::Show => {
                    let path = config::Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!("{} {}", "Proxy endpoint:".bold(), config.proxy_endpoint());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_generate(args: &[&str]) -> Result<GenerateArgs, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Some(Commands::Generate(args)) => Ok(args),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_copy_index_is_one_based() {
        let args = parse_generate(&["studio", "generate", "owl", "--copy", "2"]).unwrap();
        assert_eq!(args.copy, Some(2));
        assert_eq!(args.keyword, vec!["owl"]);
    }

    #[test]
    fn test_copy_zero_is_rejected() {
        assert!(parse_generate(&["studio", "generate", "owl", "--copy", "0"]).is_err());
    }

    #[test]
    fn test_no_subcommand_opens_studio() {
        let cli = Cli::try_parse_from(["studio"]).unwrap();
        assert!(cli.command.is_none());
    }
}

//! One-shot generation: `studio generate <keyword>`.

use std::time::Instant;

use anyhow::{bail, Result};
use colored::Colorize;

use super::GenerateArgs;
use crate::catalog::Catalog;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::output;
use crate::provider::resolve_model;
use crate::proxy::ProxyClient;
use crate::render::ResultView;
use crate::store::FileStore;
use crate::studio::{Studio, StudioDefaults};

/// Runs a single generation cycle and prints the results.
pub(super) async fn run_generate(args: GenerateArgs) -> Result<()> {
    let keyword = args.keyword.join(" ");
    if keyword.trim().is_empty() {
        bail!("No keyword provided. Usage: studio generate \"a lighthouse at dawn\"");
    }

    let config = Config::load()?;
    let catalog = Catalog::builtin();
    let selection = resolve_model(
        args.provider.as_deref(),
        args.model.as_deref(),
        &config,
        &catalog,
    )?;
    let template = catalog.resolve_template(
        args.template.as_deref().unwrap_or(config.template_name()),
    )?;
    let defaults = StudioDefaults {
        provider: selection.provider,
        model: selection.model,
        template,
        count: args.count.unwrap_or(config.prompt_count()),
    };

    let mut studio = Studio::new(&catalog, FileStore::open_default()?, &defaults);
    studio.form_mut().keyword = keyword;

    output::print_header(
        studio.form().provider().as_str(),
        studio.form().model(),
        studio.form().template(),
    );
    println!("{}", crate::constants::LOADING_NOTICE.dimmed());
    println!();

    let client = ProxyClient::from_config(&config);
    studio.submit(&client).await?;

    if let ResultView::Error(message) = studio.results() {
        bail!("{message}");
    }
    output::print_results(studio.results());

    if let Some(n) = args.copy {
        let mut clipboard = SystemClipboard::holding();
        let index = usize::try_from(n - 1)?;
        if studio.copy_result(index, &mut clipboard, Instant::now()) {
            println!("{}", format!("Copied prompt {n} to the clipboard.").green());
        } else {
            output::print_error(&format!("Could not copy prompt {n}."));
        }
    }

    Ok(())
}

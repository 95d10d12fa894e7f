use crate::models::args::RenderArgs;
use anyhow::{Context, Result};
use std::io::Write;
use techdeck::cards::render_static_page;
use techdeck::catalog_ids;
use techdeck::domain::config::DeckConfig;
use techdeck::kernel::{Deck, Selection};
use tracing::{info, warn};

/// Renders the portfolio page described by `config` and `args`.
///
/// `--toggle` flips ids against the configured portfolio, so toggled cards carry the changed
/// marker. `--feature` adds to the configured featured set. Ids missing from the catalog are
/// logged and ignored.
#[must_use]
pub fn render_page(config: &DeckConfig, args: &RenderArgs) -> String {
    let mut config = config.clone();
    if let Some(cols) = args.cols {
        config.layout.cols = cols;
    }

    let deck = Deck::from(&config);
    let known = |id: &&String| {
        let found = deck.catalog().contains(id);
        if !found {
            warn!(id = id.as_str(), "Ignoring unknown technology on the command line");
        }
        found
    };

    let mut selection = Selection::new(
        config.portfolio.selected.iter().cloned(),
        config.portfolio.featured.iter().cloned(),
    );
    for id in args.feature.iter().filter(known) {
        if !selection.is_featured(id) {
            selection.toggle_featured(id);
        }
    }
    for id in args.toggle.iter().filter(known) {
        selection.toggle(id);
    }

    let ids = if args.only_selected {
        selection.selected().map(str::to_owned).collect()
    } else {
        catalog_ids(&config)
    };

    render_static_page(&deck, &selection, ids, &args.title)
}

/// Writes the rendered page to `--out` or to `stdout`.
///
/// # Errors
/// Returns an error if the output file or stream cannot be written.
pub fn run(config: &DeckConfig, args: &RenderArgs, stdout: &mut impl Write) -> Result<()> {
    let html = render_page(config, args);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Portfolio page written");
        },
        None => {
            stdout.write_all(html.as_bytes()).context("Failed to write page to stdout")?;
            stdout.flush()?;
        },
    }
    Ok(())
}

use anyhow::Result;
use std::io::Write;
use techdeck::catalog_ids;
use techdeck::domain::config::DeckConfig;
use techdeck::kernel::{Catalog, Selection, partition_by_sector};

/// Writes one block per sector: the heading, then `id  name` rows with the portfolio flags.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn run(config: &DeckConfig, selected_only: bool, out: &mut impl Write) -> Result<()> {
    let catalog = Catalog::new(config.catalog.clone());
    let selection = Selection::from(&config.portfolio);

    let ids: Vec<String> = if selected_only {
        selection.selected().map(str::to_owned).collect()
    } else {
        catalog_ids(config)
    };
    let groups = partition_by_sector(&catalog, &ids);
    let width = ids.iter().map(String::len).max().unwrap_or_default();

    for group in groups {
        writeln!(out, "{}", group.sector)?;
        for id in &group.ids {
            let name = catalog.metadata(id).map(|meta| meta.name.as_str())?;
            let mut flags = String::new();
            if selection.is_selected(id) {
                flags.push_str(" [selected]");
            }
            if selection.is_featured(id) {
                flags.push_str(" [featured]");
            }
            writeln!(out, "  {id:<width$}  {name}{flags}")?;
        }
    }
    out.flush()?;
    Ok(())
}

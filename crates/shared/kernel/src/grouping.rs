use crate::catalog::Catalog;
use tracing::warn;

/// Identifiers of one sector, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorGroup {
    pub sector: String,
    pub ids: Vec<String>,
}

/// Splits `ids` by sector, following the sector table's order.
///
/// Empty sectors are omitted. Identifiers missing from the metadata table are dropped with a
/// warning, and so are identifiers whose sector is not listed in the sector table.
pub fn partition_by_sector<I, S>(catalog: &Catalog, ids: I) -> Vec<SectorGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: Vec<SectorGroup> = catalog
        .sector_names()
        .map(|sector| SectorGroup { sector: sector.to_owned(), ids: Vec::new() })
        .collect();

    for id in ids {
        let id = id.as_ref();
        let Ok(meta) = catalog.metadata(id) else {
            warn!(id, "Skipping technology without metadata");
            continue;
        };
        match groups.iter_mut().find(|group| group.sector == meta.sector) {
            Some(group) => group.ids.push(id.to_owned()),
            None => warn!(id, sector = %meta.sector, "Technology sector is not listed, skipping"),
        }
    }

    groups.retain(|group| !group.ids.is_empty());
    groups
}

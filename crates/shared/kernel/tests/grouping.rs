pub mod fixtures;

use fixtures::*;
use proptest::prelude::*;
use techdeck_kernel::{SectorGroup, partition_by_sector};

#[test]
fn groups_follow_sector_order_and_skip_empty_sectors() {
    let catalog = sample_catalog();
    let groups = partition_by_sector(&catalog, ["ev", "solar", "rail", "wind"]);

    assert_eq!(
        groups,
        vec![
            SectorGroup {
                sector: "Electricity".to_owned(),
                ids: vec!["solar".to_owned(), "wind".to_owned()]
            },
            SectorGroup {
                sector: "Transport".to_owned(),
                ids: vec!["ev".to_owned(), "rail".to_owned()]
            },
        ]
    );
}

#[test]
fn unknown_ids_and_unlisted_sectors_are_dropped() {
    let catalog = sample_catalog();
    let groups = partition_by_sector(&catalog, ["fusion", "hydrogen", "ev"]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].sector, "Transport");
    assert_eq!(groups[0].ids, ["ev"]);
}

#[test]
fn no_ids_means_no_groups() {
    let catalog = sample_catalog();
    assert!(partition_by_sector(&catalog, Vec::<String>::new()).is_empty());
}

const KNOWN: [&str; 4] = ["solar", "wind", "ev", "rail"];

proptest! {
    #[test]
    fn every_listed_id_lands_in_its_sector_in_order(picks in proptest::collection::vec(0..KNOWN.len(), 0..32)) {
        let catalog = sample_catalog();
        let ids: Vec<&str> = picks.iter().map(|&i| KNOWN[i]).collect();
        let groups = partition_by_sector(&catalog, &ids);

        let total: usize = groups.iter().map(|g| g.ids.len()).sum();
        prop_assert_eq!(total, ids.len());

        for group in &groups {
            prop_assert!(!group.ids.is_empty());
            let expected: Vec<&str> = ids
                .iter()
                .copied()
                .filter(|id| catalog.metadata(id).map(|m| m.sector == group.sector).unwrap_or(false))
                .collect();
            prop_assert_eq!(&group.ids, &expected);
        }
    }
}

use techdeck_domain::config::PortfolioConfig;
use techdeck_kernel::Selection;

#[test]
fn loaded_portfolio_has_no_changes() {
    let selection = Selection::new(["solar", "ev"], ["solar"]);
    assert!(selection.is_selected("solar"));
    assert!(selection.is_featured("solar"));
    assert!(!selection.is_featured("ev"));
    assert_eq!(selection.changed().count(), 0);
}

#[test]
fn toggling_marks_technology_changed_until_toggled_back() {
    let mut selection = Selection::new(["solar"], Vec::<String>::new());

    assert!(selection.toggle("wind"));
    assert!(selection.is_changed("wind"));

    assert!(!selection.toggle("solar"));
    assert!(selection.is_changed("solar"));
    assert_eq!(selection.changed().collect::<Vec<_>>(), ["solar", "wind"]);

    assert!(!selection.toggle("wind"));
    assert!(!selection.is_changed("wind"));
}

#[test]
fn commit_accepts_current_selection() {
    let mut selection = Selection::new(["solar"], Vec::<String>::new());
    selection.toggle("ev");
    selection.commit();

    assert!(!selection.is_changed("ev"));
    assert_eq!(selection.selected().collect::<Vec<_>>(), ["ev", "solar"]);
}

#[test]
fn featured_toggle_is_independent_of_selection() {
    let mut selection = Selection::default();
    assert!(selection.toggle_featured("rail"));
    assert!(selection.is_featured("rail"));
    assert!(!selection.is_selected("rail"));
    assert!(!selection.toggle_featured("rail"));
}

#[test]
fn builds_from_portfolio_config() {
    let portfolio = PortfolioConfig {
        selected: vec!["ev".to_owned()],
        featured: vec!["rail".to_owned()],
    };
    let selection = Selection::from(&portfolio);
    assert!(selection.is_selected("ev"));
    assert!(selection.is_featured("rail"));
}

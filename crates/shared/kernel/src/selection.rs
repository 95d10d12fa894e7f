use std::collections::BTreeSet;
use techdeck_domain::config::PortfolioConfig;
use tracing::debug;

/// Portfolio state driving the selected, featured and changed card flags.
///
/// A technology is *changed* when its selection differs from the baseline, i.e. the
/// selection as it was when the portfolio was loaded or last committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<String>,
    featured: BTreeSet<String>,
    baseline: BTreeSet<String>,
}

impl Selection {
    pub fn new<S, F>(selected: S, featured: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let selected: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        Self {
            baseline: selected.clone(),
            selected,
            featured: featured.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn is_featured(&self, id: &str) -> bool {
        self.featured.contains(id)
    }

    #[must_use]
    pub fn is_changed(&self, id: &str) -> bool {
        self.selected.contains(id) != self.baseline.contains(id)
    }

    /// Flips the selection of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_selected = if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_owned());
            true
        };
        debug!(id, selected = now_selected, "Selection toggled");
        now_selected
    }

    /// Flips whether `id` is featured and returns the new state.
    pub fn toggle_featured(&mut self, id: &str) -> bool {
        if self.featured.remove(id) {
            false
        } else {
            self.featured.insert(id.to_owned());
            true
        }
    }

    /// Accepts the current selection as the new baseline.
    pub fn commit(&mut self) {
        self.baseline.clone_from(&self.selected);
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Identifiers whose selection differs from the baseline, in sorted order.
    pub fn changed(&self) -> impl Iterator<Item = &str> {
        self.selected.symmetric_difference(&self.baseline).map(String::as_str)
    }
}

impl From<&PortfolioConfig> for Selection {
    fn from(portfolio: &PortfolioConfig) -> Self {
        Self::new(portfolio.selected.iter().cloned(), portfolio.featured.iter().cloned())
    }
}

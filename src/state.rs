use crate::models::{Offer, OfferForm, OfferList, Summary};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tab {
    #[serde(rename = "add-tab")]
    Add,
    #[serde(rename = "list-tab")]
    List,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Add, Tab::List];

    pub fn region_id(self) -> &'static str {
        match self {
            Tab::Add => "add-tab",
            Tab::List => "list-tab",
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Tab::Add => "add-tab-btn",
            Tab::List => "list-tab-btn",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Add => "add",
            Tab::List => "list",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Everything the page shows. Only the controller mutates it, and only from
/// synchronous sections; the offers API owns the data.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub visible: Option<Tab>,
    pub active_link: Option<Tab>,
    pub offers: Vec<Offer>,
    pub summary: Option<Summary>,
    pub draft: OfferForm,
    pub notices: Vec<String>,
    pub in_flight: usize,
    pub refreshed_at: Option<String>,
    #[serde(skip)]
    pub(crate) applied_seq: u64,
}

impl ViewState {
    /// Single-slot visibility: showing `target` hides every other region, and
    /// the trigger (if any) replaces whatever link was active.
    pub fn show(&mut self, target: Tab, trigger: Option<Tab>) {
        self.visible = Some(target);
        self.active_link = trigger;
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.visible == Some(tab)
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_link == Some(tab)
    }

    /// Replaces the table with a completed fetch. Returns true when a newer
    /// fetch had already been applied; the rows are replaced regardless.
    pub fn apply_list(&mut self, seq: u64, list: OfferList, refreshed_at: String) -> bool {
        let stale = seq < self.applied_seq;
        self.applied_seq = self.applied_seq.max(seq);
        self.offers = list.list;
        self.summary = list.summary;
        self.refreshed_at = Some(refreshed_at);
        stale
    }

    pub fn total_count(&self) -> u64 {
        self.summary
            .map(|summary| summary.total_count)
            .unwrap_or(self.offers.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferId;

    fn offer(id: i64) -> Offer {
        Offer {
            id: OfferId::Number(id.into()),
            ..Offer::default()
        }
    }

    #[test]
    fn show_keeps_a_single_region_and_link() {
        let mut view = ViewState::default();
        view.show(Tab::Add, Some(Tab::Add));
        assert!(view.is_visible(Tab::Add) && view.is_active(Tab::Add));

        view.show(Tab::List, None);
        assert!(view.is_visible(Tab::List));
        assert!(!view.is_visible(Tab::Add));
        assert!(Tab::ALL.iter().all(|tab| !view.is_active(*tab)));
    }

    #[test]
    fn apply_list_replaces_rows_and_flags_stale_completions() {
        let mut view = ViewState::default();
        let first = OfferList {
            list: vec![offer(1), offer(2)],
            summary: None,
        };
        let second = OfferList {
            list: vec![offer(3)],
            summary: None,
        };

        assert!(!view.apply_list(2, first, "10:00:00".into()));
        assert_eq!(view.offers.len(), 2);

        assert!(view.apply_list(1, second, "10:00:01".into()));
        assert_eq!(view.offers, vec![offer(3)]);
        assert_eq!(view.total_count(), 1);
    }

    #[test]
    fn tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(Tab::from_slug("settings"), None);
    }
}

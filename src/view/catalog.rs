//! Resource-list presentation state.
//!
//! The three catalog pages share one shape: fetch the collection on mount,
//! show it as cards, drive a detail modal from a single selected item, and
//! fade each card in the first time it scrolls into view. [`CatalogView`]
//! implements that shape once, parametrized by record type.

use std::collections::HashMap;

use crate::client::{CatalogClient, ClientError};
use crate::models::CatalogRecord;

/// Load progress for a catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<R> {
    Loading,
    Ready(Vec<R>),
    Failed(String),
}

/// Source of card-visibility notifications.
///
/// Whatever intersection-notification facility the embedding environment
/// provides can implement this; the view only consumes the ids of items
/// that came into view.
pub trait VisibilityObserver {
    /// Item ids that entered the viewport since the last poll.
    fn take_visible(&mut self) -> Vec<i64>;
}

/// Presentation state for one catalog page.
///
/// Holds the fetched collection (backend order preserved verbatim), at most
/// one selected item driving the detail modal, and the per-card reveal map
/// driving entrance animation. Selection and reveal are view-only state;
/// neither ever issues a request.
#[derive(Debug)]
pub struct CatalogView<R: CatalogRecord> {
    state: LoadState<R>,
    selected: Option<i64>,
    revealed: HashMap<i64, bool>,
}

impl<R: CatalogRecord> CatalogView<R> {
    /// A freshly mounted page, waiting on its collection.
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            selected: None,
            revealed: HashMap::new(),
        }
    }

    /// Fetch the bound collection and settle into `Ready` or `Failed`.
    pub async fn load(&mut self, client: &CatalogClient) {
        let result = client.get_all::<R>().await;
        self.resolve(result);
    }

    /// Apply the outcome of a fetch.
    ///
    /// A resolution arriving when the page is no longer `Loading` belongs
    /// to a request the page has moved past (an unmount, a retry); it is
    /// dropped, not an error.
    pub fn resolve(&mut self, result: Result<Vec<R>, ClientError>) {
        if !matches!(self.state, LoadState::Loading) {
            tracing::debug!("dropping stale {} resolution", R::RESOURCE);
            return;
        }

        self.state = match result {
            Ok(records) => LoadState::Ready(records),
            Err(e) => {
                tracing::warn!("loading {} failed: {}", R::RESOURCE, e);
                LoadState::Failed(format!(
                    "Failed to load {}. Please try again later.",
                    R::RESOURCE.label()
                ))
            }
        };
    }

    /// The user-triggered recovery path: a full reload. Resets the page to
    /// `Loading` so the caller re-issues the same request. Only meaningful
    /// from `Failed`.
    pub fn retry(&mut self) {
        if matches!(self.state, LoadState::Failed(_)) {
            *self = Self::new();
        }
    }

    pub fn state(&self) -> &LoadState<R> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// User-facing message when the page failed to load.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The fetched collection, in backend order. Empty unless `Ready`.
    pub fn records(&self) -> &[R] {
        match &self.state {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }

    // ============================================================
    // Selection
    // ============================================================

    /// Select the card with the given id, replacing any previous selection.
    /// Ignored unless the collection is loaded and contains the id.
    pub fn select(&mut self, id: i64) {
        if self.records().iter().any(|r| r.id() == id) {
            self.selected = Some(id);
        }
    }

    /// Close the detail modal.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The record behind the open detail modal, if any.
    pub fn selected(&self) -> Option<&R> {
        let id = self.selected?;
        self.records().iter().find(|r| r.id() == id)
    }

    // ============================================================
    // Reveal
    // ============================================================

    /// Mark a card as having entered the viewport. Reveals are monotonic;
    /// a revealed card never hides again. Ids the collection does not
    /// contain are ignored.
    pub fn reveal(&mut self, id: i64) {
        if self.records().iter().any(|r| r.id() == id) {
            self.revealed.insert(id, true);
        }
    }

    pub fn is_revealed(&self, id: i64) -> bool {
        self.revealed.get(&id).copied().unwrap_or(false)
    }

    /// Drain an observer, revealing every card it reports.
    pub fn observe(&mut self, observer: &mut dyn VisibilityObserver) {
        for id in observer.take_visible() {
            self.reveal(id);
        }
    }
}

impl<R: CatalogRecord> Default for CatalogView<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Character, Rank, Resource};

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            description: "A demon slayer.".to_string(),
            breathing: "Water Breathing".to_string(),
            rank: Rank::DemonSlayer,
            image: "https://example.com/portrait.jpg".to_string(),
            abilities: vec!["Enhanced Smell".to_string()],
            personality: "Determined".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn fetch_failed() -> ClientError {
        ClientError::FetchFailed {
            resource: Resource::Characters,
        }
    }

    #[test]
    fn starts_loading() {
        let view: CatalogView<Character> = CatalogView::new();
        assert!(view.is_loading());
        assert!(view.records().is_empty());
        assert!(view.selected().is_none());
    }

    #[test]
    fn success_stores_records_in_backend_order() {
        let mut view = CatalogView::new();
        view.resolve(Ok(vec![
            character(3, "Zenitsu"),
            character(1, "Tanjiro"),
            character(2, "Nezuko"),
        ]));

        let names: Vec<_> = view.records().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zenitsu", "Tanjiro", "Nezuko"]);
    }

    #[test]
    fn failure_stores_user_facing_message() {
        let mut view: CatalogView<Character> = CatalogView::new();
        view.resolve(Err(fetch_failed()));

        assert_eq!(
            view.error(),
            Some("Failed to load characters. Please try again later.")
        );
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut view = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro")]));

        // A second completion (e.g. from a page the user already left)
        // must not clobber the settled state.
        view.resolve(Err(fetch_failed()));
        assert_eq!(view.records().len(), 1);

        view.resolve(Ok(vec![character(2, "Nezuko")]));
        assert_eq!(view.records()[0].name, "Tanjiro");
    }

    #[test]
    fn retry_reenters_loading_only_from_failed() {
        let mut view: CatalogView<Character> = CatalogView::new();
        view.resolve(Err(fetch_failed()));
        view.retry();
        assert!(view.is_loading());

        let mut settled = CatalogView::new();
        settled.resolve(Ok(vec![character(1, "Tanjiro")]));
        settled.retry();
        assert_eq!(settled.records().len(), 1);
    }

    #[test]
    fn retry_resets_selection_and_reveals() {
        let mut view: CatalogView<Character> = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro")]));
        view.select(1);
        view.reveal(1);

        // Simulate the collection going away on a later reload.
        view.state = LoadState::Failed("gone".to_string());
        view.retry();

        assert!(view.selected().is_none());
        assert!(!view.is_revealed(1));
    }

    #[test]
    fn selecting_replaces_and_closing_clears() {
        let mut view = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro"), character(2, "Nezuko")]));

        view.select(1);
        assert_eq!(view.selected().map(|c| c.id), Some(1));

        view.select(2);
        assert_eq!(view.selected().map(|c| c.id), Some(2));

        view.close();
        assert!(view.selected().is_none());
    }

    #[test]
    fn selecting_unknown_or_unloaded_ids_is_ignored() {
        let mut loading: CatalogView<Character> = CatalogView::new();
        loading.select(1);
        assert!(loading.selected().is_none());

        let mut view = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro")]));
        view.select(99);
        assert!(view.selected().is_none());
    }

    #[test]
    fn reveal_is_monotonic_and_per_card() {
        let mut view = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro"), character(2, "Nezuko")]));

        assert!(!view.is_revealed(1));
        view.reveal(1);
        view.reveal(1);
        assert!(view.is_revealed(1));
        assert!(!view.is_revealed(2));

        view.reveal(99);
        assert!(!view.is_revealed(99));
    }

    struct FakeObserver(Vec<i64>);

    impl VisibilityObserver for FakeObserver {
        fn take_visible(&mut self) -> Vec<i64> {
            std::mem::take(&mut self.0)
        }
    }

    #[test]
    fn observer_notifications_reveal_cards() {
        let mut view = CatalogView::new();
        view.resolve(Ok(vec![character(1, "Tanjiro"), character(2, "Nezuko")]));

        let mut observer = FakeObserver(vec![2]);
        view.observe(&mut observer);

        assert!(view.is_revealed(2));
        assert!(!view.is_revealed(1));
    }
}

use contracts::watchlist::{Watchlist, WatchlistItem};
use leptos::prelude::*;

/// Reactive handle to the user's watchlist. Lives for the page session only.
#[derive(Clone, Copy)]
pub struct WatchlistContext {
    list: RwSignal<Watchlist>,
}

impl WatchlistContext {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(Watchlist::new()),
        }
    }

    pub fn add(&self, item: WatchlistItem) -> bool {
        let movie_id = item.movie_id;
        let mut added = false;
        self.list.update(|list| added = list.add(item));
        if added {
            log::info!("watchlist: added movie {}", movie_id);
        } else {
            log::debug!("watchlist: movie {} already present", movie_id);
        }
        added
    }

    pub fn remove(&self, movie_id: u64) -> Option<WatchlistItem> {
        let mut removed = None;
        self.list.update(|list| removed = list.remove(movie_id));
        if removed.is_some() {
            log::info!("watchlist: removed movie {}", movie_id);
        }
        removed
    }

    /// Returns whether the movie is on the list afterwards.
    pub fn toggle(&self, item: WatchlistItem) -> bool {
        let movie_id = item.movie_id;
        let mut present = false;
        self.list.update(|list| present = list.toggle(item));
        log::info!("watchlist: toggled movie {} -> {}", movie_id, present);
        present
    }

    pub fn contains(&self, movie_id: u64) -> bool {
        self.list.with(|list| list.contains(movie_id))
    }

    pub fn items(&self) -> Vec<WatchlistItem> {
        self.list.with(|list| list.items().to_vec())
    }

    pub fn count(&self) -> usize {
        self.list.with(|list| list.len())
    }

    pub fn clear(&self) {
        self.list.update(|list| list.clear());
    }
}

impl Default for WatchlistContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_mutations() {
        let owner = Owner::new();
        owner.with(|| {
            let watchlist = WatchlistContext::new();
            assert!(watchlist.add(WatchlistItem::new(1, "Heat")));
            assert!(!watchlist.add(WatchlistItem::new(1, "Heat")));
            assert!(watchlist.toggle(WatchlistItem::new(2, "Ran")));
            assert_eq!(watchlist.count(), 2);
            assert!(watchlist.contains(2));

            assert_eq!(watchlist.remove(1).map(|i| i.title), Some("Heat".to_string()));
            assert!(!watchlist.toggle(WatchlistItem::new(2, "Ran")));
            assert_eq!(watchlist.count(), 0);
        });
    }

    #[test]
    fn test_copies_share_state() {
        let owner = Owner::new();
        owner.with(|| {
            let watchlist = WatchlistContext::new();
            let other = watchlist;
            other.add(WatchlistItem::new(9, "Alien"));
            assert!(watchlist.contains(9));
            watchlist.clear();
            assert_eq!(other.count(), 0);
        });
    }
}

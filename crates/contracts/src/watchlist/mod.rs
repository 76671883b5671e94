use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Фильм, сохранённый пользователем в список просмотра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub movie_id: u64,
    pub title: String,
    pub year: Option<u16>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub added_at: DateTime<Utc>,
}

impl WatchlistItem {
    pub fn new(movie_id: u64, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            year: None,
            genres: Vec::new(),
            added_at: Utc::now(),
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// "Title (1999)" or just the title when the year is unknown.
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

/// In-memory watchlist, unique by `movie_id`, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    items: Vec<WatchlistItem>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the movie is already on the list.
    pub fn add(&mut self, item: WatchlistItem) -> bool {
        if self.contains(item.movie_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, movie_id: u64) -> Option<WatchlistItem> {
        let pos = self.items.iter().position(|i| i.movie_id == movie_id)?;
        Some(self.items.remove(pos))
    }

    /// Adds the item if absent, removes it otherwise. Returns whether the
    /// movie is on the list afterwards.
    pub fn toggle(&mut self, item: WatchlistItem) -> bool {
        if self.remove(item.movie_id).is_some() {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn contains(&self, movie_id: u64) -> bool {
        self.items.iter().any(|i| i.movie_id == movie_id)
    }

    pub fn get(&self, movie_id: u64) -> Option<&WatchlistItem> {
        self.items.iter().find(|i| i.movie_id == movie_id)
    }

    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dedupes_by_movie_id() {
        let mut list = Watchlist::new();
        assert!(list.add(WatchlistItem::new(1, "Heat")));
        assert!(!list.add(WatchlistItem::new(1, "Heat (director's cut)")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).map(|i| i.title.as_str()), Some("Heat"));
    }

    #[test]
    fn test_insertion_order() {
        let mut list = Watchlist::new();
        list.add(WatchlistItem::new(3, "Alien"));
        list.add(WatchlistItem::new(1, "Heat"));
        list.add(WatchlistItem::new(2, "Ran"));
        let ids: Vec<u64> = list.items().iter().map(|i| i.movie_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut list = Watchlist::new();
        list.add(WatchlistItem::new(1, "Heat"));
        assert_eq!(list.remove(1).map(|i| i.movie_id), Some(1));
        assert_eq!(list.remove(1), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut list = Watchlist::new();
        assert!(list.toggle(WatchlistItem::new(7, "Seven")));
        assert!(list.contains(7));
        assert!(!list.toggle(WatchlistItem::new(7, "Seven")));
        assert!(!list.contains(7));
    }

    #[test]
    fn test_display_title() {
        let item = WatchlistItem::new(1, "Heat").with_year(1995);
        assert_eq!(item.display_title(), "Heat (1995)");
        assert_eq!(WatchlistItem::new(2, "Ran").display_title(), "Ran");
    }

    #[test]
    fn test_genres_default_when_missing() {
        let json = r#"{"movie_id":5,"title":"Up","year":2009,"added_at":"2024-03-15T14:02:26Z"}"#;
        let item: WatchlistItem = serde_json::from_str(json).unwrap();
        assert!(item.genres.is_empty());
        assert_eq!(item.year, Some(2009));
    }
}

pub mod dashboard;
pub mod watchlist;

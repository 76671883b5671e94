pub mod components;
pub mod config;
pub mod icons;
pub mod query;
pub mod theme;
pub mod toast;
pub mod watchlist;

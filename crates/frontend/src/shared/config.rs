//! Application configuration.
//!
//! Static copy and tunables for the dashboard shell and its services.

use contracts::dashboard::TabId;

/// Port of the recommendation API, relative to the page host.
const API_PORT: u16 = 5000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
    /// Tab shown when the shell mounts.
    pub default_tab: TabId,
    /// Cached query entries older than this are considered stale.
    pub query_stale_secs: i64,
    pub tooltip_delay_ms: u32,
    pub toast_limit: usize,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Movie Recommender",
            subtitle: "TF-IDF & Gemini AI Powered",
            footer: "Movie Recommendation Dashboard powered by TF-IDF Content-Based Filtering & Google Gemini AI",
            default_tab: TabId::Dashboard,
            query_stale_secs: 300,
            tooltip_delay_ms: 300,
            toast_limit: 3,
            toast_duration_ms: 5000,
        }
    }
}

/// Base URL of the recommendation API.
///
/// Built from the current window location, e.g. "http://localhost:5000".
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_api_base(&protocol, &hostname, API_PORT)
}

fn format_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Movie Recommender");
        assert_eq!(config.default_tab, TabId::Dashboard);
        assert_eq!(config.query_stale_secs, 300);
        assert_eq!(config.toast_limit, 3);
    }

    #[test]
    fn test_format_api_base() {
        assert_eq!(
            format_api_base("https:", "movies.example.com", 5000),
            "https://movies.example.com:5000"
        );
    }
}

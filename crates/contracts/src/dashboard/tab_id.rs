use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Идентификаторы вкладок дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    Dashboard,
    DataFeatures,
    Visualization,
    Recommendations,
    Evaluation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTabIdError {
    #[error("unknown tab id: '{0}'")]
    Unknown(String),
}

impl TabId {
    /// Stable code used in test ids, `data-tab-key` and serialized state.
    pub fn code(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::DataFeatures => "data-features",
            TabId::Visualization => "visualization",
            TabId::Recommendations => "recommendations",
            TabId::Evaluation => "evaluation",
        }
    }

    /// All tab ids in display order.
    pub fn all() -> [TabId; 5] {
        [
            TabId::Dashboard,
            TabId::DataFeatures,
            TabId::Visualization,
            TabId::Recommendations,
            TabId::Evaluation,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(TabId::Dashboard),
            "data-features" => Some(TabId::DataFeatures),
            "visualization" => Some(TabId::Visualization),
            "recommendations" => Some(TabId::Recommendations),
            "evaluation" => Some(TabId::Evaluation),
            _ => None,
        }
    }
}

impl FromStr for TabId {
    type Err = ParseTabIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::from_code(s).ok_or_else(|| ParseTabIdError::Unknown(s.to_string()))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for id in TabId::all() {
            assert_eq!(id.code().parse::<TabId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            "settings".parse::<TabId>(),
            Err(ParseTabIdError::Unknown("settings".to_string()))
        );
        assert_eq!(TabId::from_code("Dashboard"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&TabId::DataFeatures).unwrap();
        assert_eq!(json, "\"data-features\"");
        let back: TabId = serde_json::from_str("\"evaluation\"").unwrap();
        assert_eq!(back, TabId::Evaluation);
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(TabId::default(), TabId::Dashboard);
    }
}

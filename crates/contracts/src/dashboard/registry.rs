//! Реестр вкладок дашборда.
//!
//! Порядок элементов определяет порядок кнопок в панели вкладок.

use super::tab_id::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
    /// Icon name understood by the frontend `icons::icon` helper.
    pub icon_name: &'static str,
}

impl TabDescriptor {
    /// First word of the label, shown on narrow layouts.
    pub fn short_label(&self) -> &'static str {
        self.label.split(' ').next().unwrap_or(self.label)
    }

    /// Value of the `data-testid` attribute on the tab trigger.
    pub fn test_id(&self) -> String {
        format!("tab-{}", self.id.code())
    }
}

pub static TAB_REGISTRY: [TabDescriptor; 5] = [
    TabDescriptor {
        id: TabId::Dashboard,
        label: "Dashboard",
        icon_name: "layout-dashboard",
    },
    TabDescriptor {
        id: TabId::DataFeatures,
        label: "Data & Features",
        icon_name: "database",
    },
    TabDescriptor {
        id: TabId::Visualization,
        label: "Visualization",
        icon_name: "bar-chart",
    },
    TabDescriptor {
        id: TabId::Recommendations,
        label: "Recommendations",
        icon_name: "sparkles",
    },
    TabDescriptor {
        id: TabId::Evaluation,
        label: "Evaluation",
        icon_name: "target",
    },
];

/// Looks up the descriptor for a tab. Every `TabId` has exactly one entry.
pub fn descriptor(id: TabId) -> &'static TabDescriptor {
    match id {
        TabId::Dashboard => &TAB_REGISTRY[0],
        TabId::DataFeatures => &TAB_REGISTRY[1],
        TabId::Visualization => &TAB_REGISTRY[2],
        TabId::Recommendations => &TAB_REGISTRY[3],
        TabId::Evaluation => &TAB_REGISTRY[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order() {
        let codes: Vec<&str> = TAB_REGISTRY.iter().map(|t| t.id.code()).collect();
        assert_eq!(
            codes,
            vec![
                "dashboard",
                "data-features",
                "visualization",
                "recommendations",
                "evaluation"
            ]
        );
    }

    #[test]
    fn test_ids_unique_and_complete() {
        let ids: HashSet<TabId> = TAB_REGISTRY.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
        for id in TabId::all() {
            assert!(ids.contains(&id));
        }
    }

    #[test]
    fn test_descriptor_matches_id() {
        for id in TabId::all() {
            assert_eq!(descriptor(id).id, id);
        }
    }

    #[test]
    fn test_short_label() {
        assert_eq!(descriptor(TabId::DataFeatures).short_label(), "Data");
        assert_eq!(descriptor(TabId::Evaluation).short_label(), "Evaluation");
    }

    #[test]
    fn test_test_id() {
        assert_eq!(descriptor(TabId::Visualization).test_id(), "tab-visualization");
        assert_eq!(descriptor(TabId::DataFeatures).test_id(), "tab-data-features");
    }
}

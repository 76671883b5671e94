//! DOM attributes of tab triggers and tab pages.
//!
//! `TabTrigger` and `TabPage` render exactly what these builders return, so the
//! test ids, `data-state` and the hidden class are checked without a browser.

use contracts::dashboard::{descriptor, RegionState, TabId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttrs {
    pub test_id: String,
    pub data_state: &'static str,
    pub aria_selected: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAttrs {
    pub tab_key: &'static str,
    pub data_state: &'static str,
    pub class: &'static str,
}

pub fn trigger_attrs(tab: TabId, state: RegionState) -> TriggerAttrs {
    let active = state.is_active();
    TriggerAttrs {
        test_id: descriptor(tab).test_id(),
        data_state: state.as_str(),
        aria_selected: if active { "true" } else { "false" },
        class: if active {
            "tabs__trigger tabs__trigger--active"
        } else {
            "tabs__trigger"
        },
    }
}

pub fn page_attrs(tab: TabId, state: RegionState) -> PageAttrs {
    PageAttrs {
        tab_key: tab.code(),
        data_state: state.as_str(),
        class: if state.is_active() {
            "tabs__item"
        } else {
            "tabs__item tabs__item--hidden"
        },
    }
}

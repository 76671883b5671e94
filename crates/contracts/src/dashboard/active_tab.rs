use super::tab_id::TabId;
use serde::{Deserialize, Serialize};

/// Visibility of a tab trigger or its content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    Active,
    Inactive,
}

impl RegionState {
    /// Value of the `data-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionState::Active => "active",
            RegionState::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RegionState::Active)
    }
}

/// Outcome of a tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: TabId, to: TabId },
    Unchanged(TabId),
}

/// Active tab of the dashboard shell.
///
/// Starts on `TabId::Dashboard`; `select` is the only mutation and accepts
/// any id unconditionally. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveTabState {
    active: TabId,
}

impl ActiveTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(active: TabId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active == id
    }

    pub fn select(&mut self, id: TabId) -> Transition {
        if self.active == id {
            return Transition::Unchanged(id);
        }
        let from = self.active;
        self.active = id;
        Transition::Changed { from, to: id }
    }

    pub fn region_state(&self, id: TabId) -> RegionState {
        if self.is_active(id) {
            RegionState::Active
        } else {
            RegionState::Inactive
        }
    }

    /// Region states for every tab, in registry order.
    pub fn regions(&self) -> [(TabId, RegionState); 5] {
        TabId::all().map(|id| (id, self.region_state(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(state: &ActiveTabState) -> usize {
        state
            .regions()
            .iter()
            .filter(|(_, region)| region.is_active())
            .count()
    }

    #[test]
    fn test_initial_state_is_dashboard() {
        let state = ActiveTabState::new();
        assert_eq!(state.active(), TabId::Dashboard);
        assert_eq!(state.region_state(TabId::Dashboard), RegionState::Active);
        assert_eq!(active_count(&state), 1);
    }

    #[test]
    fn test_select_each_tab() {
        let mut state = ActiveTabState::new();
        for id in TabId::all() {
            state.select(id);
            assert_eq!(state.active(), id);
            for (other, region) in state.regions() {
                if other == id {
                    assert_eq!(region, RegionState::Active);
                } else {
                    assert_eq!(region, RegionState::Inactive);
                }
            }
            assert_eq!(active_count(&state), 1);
        }
    }

    #[test]
    fn test_select_reports_transition() {
        let mut state = ActiveTabState::new();
        assert_eq!(
            state.select(TabId::Visualization),
            Transition::Changed {
                from: TabId::Dashboard,
                to: TabId::Visualization
            }
        );
        assert_eq!(
            state.select(TabId::Visualization),
            Transition::Unchanged(TabId::Visualization)
        );
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut state = ActiveTabState::starting_at(TabId::Evaluation);
        let before = state;
        state.select(TabId::Evaluation);
        assert_eq!(state, before);
        assert_eq!(state.regions(), before.regions());
    }

    #[test]
    fn test_region_state_strings() {
        assert_eq!(RegionState::Active.as_str(), "active");
        assert_eq!(RegionState::Inactive.as_str(), "inactive");
    }
}

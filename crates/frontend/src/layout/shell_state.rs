use contracts::dashboard::{ActiveTabState, ParseTabIdError, RegionState, TabId, Transition};
use leptos::prelude::*;

/// Active-tab state owned by the dashboard shell.
///
/// Created when the shell mounts, dropped with it. Copies share the same signal.
#[derive(Clone, Copy)]
pub struct ShellState {
    state: RwSignal<ActiveTabState>,
}

impl ShellState {
    pub fn new(initial: TabId) -> Self {
        Self {
            state: RwSignal::new(ActiveTabState::starting_at(initial)),
        }
    }

    pub fn select_tab(&self, id: TabId) -> Transition {
        let mut transition = Transition::Unchanged(id);
        self.state.update(|state| transition = state.select(id));
        match transition {
            Transition::Changed { from, to } => log::debug!("tab: {} -> {}", from, to),
            Transition::Unchanged(id) => log::debug!("tab: '{}' already active", id),
        }
        transition
    }

    /// Selects a tab by its string code. Unknown codes leave the state untouched.
    pub fn select_code(&self, code: &str) -> Result<TabId, ParseTabIdError> {
        match code.parse::<TabId>() {
            Ok(id) => {
                self.select_tab(id);
                Ok(id)
            }
            Err(e) => {
                log::warn!("tab selection ignored: {}", e);
                Err(e)
            }
        }
    }

    pub fn active(&self) -> TabId {
        self.state.with(|state| state.active())
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.state.with(|state| state.is_active(id))
    }

    pub fn region_state(&self, id: TabId) -> RegionState {
        self.state.with(|state| state.region_state(id))
    }

    /// Callback handed to views that navigate between tabs.
    pub fn on_tab_change(&self) -> Callback<TabId> {
        let this = *self;
        Callback::new(move |id: TabId| {
            this.select_tab(id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard_without_interaction() {
        let owner = Owner::new();
        owner.with(|| {
            let shell = ShellState::new(TabId::default());
            assert_eq!(shell.active(), TabId::Dashboard);
            assert_eq!(shell.region_state(TabId::Dashboard), RegionState::Active);
        });
    }

    #[test]
    fn test_select_visualization_marks_only_its_region() {
        let owner = Owner::new();
        owner.with(|| {
            let shell = ShellState::new(TabId::Dashboard);
            shell.select_tab(TabId::Visualization);
            assert_eq!(shell.active(), TabId::Visualization);
            for id in TabId::all() {
                let expected = if id == TabId::Visualization {
                    RegionState::Active
                } else {
                    RegionState::Inactive
                };
                assert_eq!(shell.region_state(id), expected);
            }
        });
    }

    #[test]
    fn test_callback_selects_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let shell = ShellState::new(TabId::Dashboard);
            shell.on_tab_change().run(TabId::Recommendations);
            assert!(shell.is_active(TabId::Recommendations));
        });
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let shell = ShellState::new(TabId::Evaluation);
            assert_eq!(
                shell.select_tab(TabId::Evaluation),
                Transition::Unchanged(TabId::Evaluation)
            );
            assert_eq!(shell.active(), TabId::Evaluation);
        });
    }

    #[test]
    fn test_select_code() {
        let owner = Owner::new();
        owner.with(|| {
            let shell = ShellState::new(TabId::Dashboard);
            assert_eq!(shell.select_code("data-features"), Ok(TabId::DataFeatures));
            assert!(shell.select_code("settings").is_err());
            assert_eq!(shell.active(), TabId::DataFeatures);
        });
    }
}

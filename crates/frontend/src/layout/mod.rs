pub mod footer;
pub mod header;
pub mod shell_state;
pub mod tabs;

use crate::app::AppServices;
use contracts::dashboard::TabId;
use leptos::prelude::*;
use shell_state::ShellState;
use tabs::{TabBar, TabPage};

/// Dashboard shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Header (brand, status badge, theme)     |
/// +------------------------------------------+
/// |  TabBar                                  |
/// |  TabPage x5 (one visible)                |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
///
/// Owns the active-tab state; it starts on `config.default_tab` and is
/// dropped with the shell.
#[component]
pub fn Shell(services: AppServices) -> impl IntoView {
    let shell = ShellState::new(services.config.default_tab);

    view! {
        <div class="app-layout">
            <header::Header
                config=services.config
                theme=services.theme
                tooltips=services.tooltips
            />

            <main data-zone="center" class="container app-main">
                <div class="tabs">
                    <TabBar shell=shell />
                    {TabId::all()
                        .into_iter()
                        .map(|tab| view! { <TabPage tab=tab shell=shell services=services /> })
                        .collect_view()}
                </div>
            </main>

            <footer::Footer config=services.config />
        </div>
    }
}

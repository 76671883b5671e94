//! TabPage component - wrapper для отображения контента вкладки
//!
//! Все пять вкладок смонтированы постоянно; неактивные скрыты CSS-классом,
//! поэтому состояние дочерних компонентов переживает переключение.

use super::attrs::page_attrs;
use super::registry::render_tab_content;
use crate::app::AppServices;
use crate::layout::shell_state::ShellState;
use contracts::dashboard::{descriptor, TabId};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabId, shell: ShellState, services: AppServices) -> impl IntoView {
    let attrs = move || page_attrs(tab, shell.region_state(tab));

    log::debug!("TabPage created for '{}'", tab);
    on_cleanup(move || {
        log::debug!("TabPage destroyed for '{}'", tab);
    });

    let content = render_tab_content(tab, shell, services);

    view! {
        <div
            role="tabpanel"
            aria-label=descriptor(tab).label
            class=move || attrs().class
            data-state=move || attrs().data_state
            data-tab-key=move || attrs().tab_key
        >
            {content}
        </div>
    }
}

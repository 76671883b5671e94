use super::attrs::trigger_attrs;
use crate::layout::shell_state::ShellState;
use crate::shared::components::ui::ScrollArea;
use crate::shared::icons::icon;
use contracts::dashboard::{TabDescriptor, TAB_REGISTRY};
use leptos::prelude::*;

/// Row of tab triggers, one per registry entry, in registry order.
#[component]
pub fn TabBar(shell: ShellState) -> impl IntoView {
    view! {
        <ScrollArea class="tabs__scroll">
            <div class="tabs__list" role="tablist">
                {TAB_REGISTRY
                    .iter()
                    .map(|tab| view! { <TabTrigger tab=tab shell=shell /> })
                    .collect_view()}
            </div>
        </ScrollArea>
    }
}

#[component]
fn TabTrigger(tab: &'static TabDescriptor, shell: ShellState) -> impl IntoView {
    let id = tab.id;
    let attrs = move || trigger_attrs(id, shell.region_state(id));

    view! {
        <button
            type="button"
            role="tab"
            class=move || attrs().class
            data-state=move || attrs().data_state
            aria-selected=move || attrs().aria_selected
            data-testid=move || attrs().test_id
            on:click=move |_| {
                shell.select_tab(id);
            }
        >
            {icon(tab.icon_name)}
            <span class="hide-narrow">{tab.label}</span>
            <span class="show-narrow">{tab.short_label()}</span>
        </button>
    }
}

use super::{Theme, ThemeContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Light/dark switch for the header.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    let current = move || theme.theme.get();

    view! {
        <button
            class="button button--ghost button--icon"
            data-testid="button-theme-toggle"
            title=move || current().toggle_title()
            aria-label=move || current().toggle_title()
            on:click=move |_| theme.toggle()
        >
            {move || match current() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}

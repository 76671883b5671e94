use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn Footer(config: AppConfig) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="container">
                <p class="footer__text">{config.footer}</p>
            </div>
        </footer>
    }
}

use crate::shared::components::ui::{Badge, StatusDot, Tooltip, TooltipConfig};
use crate::shared::config::{api_base, AppConfig};
use crate::shared::icons::icon;
use crate::shared::theme::{ThemeContext, ThemeToggle};
use leptos::prelude::*;

/// Sticky top bar: branding, connection badge and theme toggle.
///
/// The badge is decorative; no health check runs here.
#[component]
pub fn Header(config: AppConfig, theme: ThemeContext, tooltips: TooltipConfig) -> impl IntoView {
    let api_hint = format!("Recommendation API: {}", api_base());

    view! {
        <header data-zone="header" class="header">
            <div class="container header__content">
                <div class="header__brand">
                    <div class="header__logo">
                        {icon("film")}
                    </div>
                    <div>
                        <h1 class="header__title" data-testid="text-app-title">
                            {config.title}
                        </h1>
                        <p class="header__subtitle hide-narrow">{config.subtitle}</p>
                    </div>
                </div>
                <div class="header__actions">
                    <Tooltip config=tooltips text=api_hint>
                        <Badge variant="outline" class="hide-narrow">
                            <StatusDot />
                            "API Connected"
                        </Badge>
                    </Tooltip>
                    <ThemeToggle theme=theme />
                </div>
            </div>
        </header>
    }
}

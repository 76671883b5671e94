use crate::layout::Shell;
use crate::shared::components::ui::TooltipConfig;
use crate::shared::config::AppConfig;
use crate::shared::query::QueryClient;
use crate::shared::theme::ThemeContext;
use crate::shared::toast::{ToastService, Toaster};
use crate::shared::watchlist::WatchlistContext;
use leptos::prelude::*;

/// Process-wide services, passed explicitly to every component that needs one.
///
/// Construction order: query client, theme, tooltips, watchlist, toasts.
/// No service reads one constructed after it.
#[derive(Clone, Copy)]
pub struct AppServices {
    pub config: AppConfig,
    pub query_client: QueryClient,
    pub theme: ThemeContext,
    pub tooltips: TooltipConfig,
    pub watchlist: WatchlistContext,
    pub toasts: ToastService,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        let query_client = QueryClient::new(config.query_stale_secs);
        let theme = ThemeContext::new();
        let tooltips = TooltipConfig::new(config.tooltip_delay_ms);
        let watchlist = WatchlistContext::new();
        let toasts = ToastService::new(config.toast_limit, config.toast_duration_ms);

        Self {
            config,
            query_client,
            theme,
            tooltips,
            watchlist,
            toasts,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::new(AppConfig::default());

    view! {
        <Shell services=services />
        <Toaster toasts=services.toasts />
    }
}

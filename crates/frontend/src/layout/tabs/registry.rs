//! Tab registry: TabId → view.
//!
//! Every `TabId` maps to exactly one view; the match is exhaustive.

use crate::app::AppServices;
use crate::layout::shell_state::ShellState;
use crate::views::{
    DashboardView, DataFeaturesView, EvaluationView, RecommendationsView, VisualizationView,
};
use contracts::dashboard::TabId;
use leptos::prelude::*;

pub fn render_tab_content(tab: TabId, shell: ShellState, services: AppServices) -> AnyView {
    match tab {
        TabId::Dashboard => view! {
            <DashboardView
                on_tab_change=shell.on_tab_change()
                watchlist=services.watchlist
                tooltips=services.tooltips
            />
        }
        .into_any(),
        TabId::DataFeatures => view! {
            <DataFeaturesView query_client=services.query_client toasts=services.toasts />
        }
        .into_any(),
        TabId::Visualization => view! { <VisualizationView theme=services.theme /> }.into_any(),
        TabId::Recommendations => view! {
            <RecommendationsView
                query_client=services.query_client
                watchlist=services.watchlist
                toasts=services.toasts
                tooltips=services.tooltips
            />
        }
        .into_any(),
        TabId::Evaluation => view! {
            <EvaluationView query_client=services.query_client toasts=services.toasts />
        }
        .into_any(),
    }
}

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Tooltip, TooltipConfig};
use crate::shared::icons::icon;
use crate::shared::watchlist::WatchlistContext;
use contracts::dashboard::{TabId, TAB_REGISTRY};
use leptos::prelude::*;

/// One-line description of what a tab offers, shown on the overview cards.
fn tab_summary(id: TabId) -> &'static str {
    match id {
        TabId::Dashboard => "Overview of the recommender and quick navigation",
        TabId::DataFeatures => "Explore the movie dataset and the extracted text features",
        TabId::Visualization => "Charts of genres, ratings and feature weights",
        TabId::Recommendations => "Find similar movies and manage your watchlist",
        TabId::Evaluation => "How well the recommendations perform",
    }
}

/// Overview tab: navigation cards for the other tabs and a watchlist summary.
#[component]
pub fn DashboardView(
    /// Selects another tab; same effect as clicking its trigger.
    on_tab_change: Callback<TabId>,
    watchlist: WatchlistContext,
    tooltips: TooltipConfig,
) -> impl IntoView {
    let nav_targets = TAB_REGISTRY.iter().filter(|t| t.id != TabId::Dashboard);

    view! {
        <section class="view view--dashboard">
            <PageHeader
                title="Overview"
                subtitle="Content-based movie recommendations from TF-IDF features, explained by Gemini"
            >
                {()}
            </PageHeader>

            <div class="stat-row">
                <div class="stat-card" data-testid="stat-watchlist">
                    <div class="stat-card__label">"Watchlist"</div>
                    <div class="stat-card__value">{move || watchlist.count()}</div>
                </div>
            </div>

            <div class="card-grid">
                {nav_targets
                    .map(|tab| {
                        let id = tab.id;
                        view! {
                            <Tooltip config=tooltips text=format!("Open {}", tab.label)>
                                <button
                                    type="button"
                                    class="nav-card"
                                    data-testid=format!("card-nav-{}", id.code())
                                    on:click=move |_| on_tab_change.run(id)
                                >
                                    <div class="nav-card__icon">{icon(tab.icon_name)}</div>
                                    <div class="nav-card__title">{tab.label}</div>
                                    <p class="nav-card__text">{tab_summary(id)}</p>
                                    <span class="nav-card__chevron">{icon("chevron-right")}</span>
                                </button>
                            </Tooltip>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_summary() {
        for id in TabId::all() {
            assert!(!tab_summary(id).is_empty());
        }
    }
}

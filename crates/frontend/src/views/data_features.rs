use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::query::QueryClient;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Query key prefix for everything this tab loads.
pub const DATA_FEATURES_QUERY_PREFIX: &str = "data-features";
const PIPELINE_QUERY_KEY: &str = "data-features/pipeline";

const PIPELINE: [(&str, &str); 4] = [
    ("Dataset", "Movie metadata: titles, overviews, genres, keywords, cast and crew"),
    (
        "Text document",
        "Overview, genres, keywords, top cast and director merged into one document per movie",
    ),
    ("TF-IDF", "Unigram and bigram term weights with English stop words removed"),
    ("Similarity", "Cosine similarity between movie vectors drives the recommendations"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub title: String,
    pub detail: String,
}

fn load_pipeline() -> Vec<PipelineStage> {
    PIPELINE
        .into_iter()
        .map(|(title, detail)| PipelineStage {
            title: title.to_string(),
            detail: detail.to_string(),
        })
        .collect()
}

/// Pipeline stages through the query cache.
fn fetch_pipeline(query_client: QueryClient) -> Vec<PipelineStage> {
    query_client.fetch_query(PIPELINE_QUERY_KEY, load_pipeline)
}

/// Drops this tab's cached queries and loads them again. Returns how many were dropped.
fn refresh_data(query_client: QueryClient) -> usize {
    let dropped = query_client.invalidate_queries(DATA_FEATURES_QUERY_PREFIX);
    fetch_pipeline(query_client);
    dropped
}

#[component]
pub fn DataFeaturesView(query_client: QueryClient, toasts: ToastService) -> impl IntoView {
    fetch_pipeline(query_client);

    let refresh = Callback::new(move |_: leptos::ev::MouseEvent| {
        let dropped = refresh_data(query_client);
        toasts.toast(
            "Data refreshed",
            Some(format!("{} cached queries invalidated", dropped)),
        );
    });

    // Cleared elsewhere (Evaluation tab): fall back to the source without re-caching.
    let stages = move || {
        query_client
            .get_query_data::<Vec<PipelineStage>>(PIPELINE_QUERY_KEY)
            .unwrap_or_else(load_pipeline)
    };

    view! {
        <section class="view view--data-features">
            <PageHeader title="Data & Features" subtitle="From raw metadata to feature vectors">
                <Button variant="outline" size="sm" test_id="button-refresh-data" on_click=refresh>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <ol class="pipeline">
                {move || stages()
                    .into_iter()
                    .enumerate()
                    .map(|(i, stage)| view! {
                        <li class="pipeline__stage">
                            <span class="pipeline__step">{i + 1}</span>
                            <div>
                                <div class="pipeline__title">{stage.title}</div>
                                <p class="pipeline__detail">{stage.detail}</p>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>

            <p class="muted">
                {move || format!("{} cached queries", query_client.len())}
            </p>
        </section>
    }
}

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::query::QueryClient;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const METRICS_QUERY_KEY: &str = "evaluation/metrics";

const METRICS: [(&str, &str); 4] = [
    ("Precision@K", "Share of the top K recommendations that are relevant"),
    ("Recall@K", "Share of relevant movies that appear in the top K"),
    ("NDCG@K", "Rewards relevant movies ranked near the top"),
    ("Catalog coverage", "Share of the catalog that ever gets recommended"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricInfo {
    pub name: String,
    pub meaning: String,
}

fn load_metrics() -> Vec<MetricInfo> {
    METRICS
        .into_iter()
        .map(|(name, meaning)| MetricInfo {
            name: name.to_string(),
            meaning: meaning.to_string(),
        })
        .collect()
}

fn fetch_metrics(query_client: QueryClient) -> Vec<MetricInfo> {
    query_client.fetch_query(METRICS_QUERY_KEY, load_metrics)
}

fn cleared_message(count: usize) -> String {
    match count {
        0 => "Cache was already empty".to_string(),
        1 => "1 cached result removed".to_string(),
        n => format!("{} cached results removed", n),
    }
}

#[component]
pub fn EvaluationView(query_client: QueryClient, toasts: ToastService) -> impl IntoView {
    let metrics = fetch_metrics(query_client);

    let clear = Callback::new(move |_: leptos::ev::MouseEvent| {
        let dropped = query_client.clear();
        toasts.toast("Cached results cleared", Some(cleared_message(dropped)));
    });

    view! {
        <section class="view view--evaluation">
            <PageHeader title="Evaluation" subtitle="Offline metrics for the recommender">
                <Button
                    variant="outline"
                    size="sm"
                    test_id="button-clear-cache"
                    disabled=Signal::derive(move || Some(query_client.is_empty()))
                    on_click=clear
                >
                    {icon("trash")}
                    "Clear cached results"
                </Button>
            </PageHeader>

            <dl class="metric-list">
                {metrics
                    .into_iter()
                    .map(|metric| view! {
                        <div class="metric-list__row">
                            <dt class="metric-list__name">{metric.name}</dt>
                            <dd class="metric-list__meaning">{metric.meaning}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_message() {
        assert_eq!(cleared_message(0), "Cache was already empty");
        assert_eq!(cleared_message(1), "1 cached result removed");
        assert_eq!(cleared_message(4), "4 cached results removed");
    }

    #[test]
    fn test_metrics_cached_until_cleared() {
        let owner = Owner::new();
        owner.with(|| {
            let client = QueryClient::new(300);
            assert!(client.is_empty());
            let metrics = fetch_metrics(client);
            assert_eq!(metrics.len(), 4);
            assert_eq!(metrics[0].name, "Precision@K");
            assert!(!client.is_empty());

            assert_eq!(client.clear(), 1);
            assert!(client.is_empty());
        });
    }
}

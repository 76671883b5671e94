use crate::shared::components::page_header::PageHeader;
use crate::shared::theme::{Theme, ThemeContext};
use leptos::prelude::*;

const CHART_PANELS: [(&str, &str); 4] = [
    ("Genre distribution", "Number of movies per genre"),
    ("Rating histogram", "Spread of average user ratings"),
    ("Release years", "Movies released per decade"),
    ("Top TF-IDF terms", "Highest-weighted terms across the corpus"),
];

/// Series colors for charts; darker backgrounds get lighter tints.
pub fn chart_palette(theme: Theme) -> [&'static str; 5] {
    match theme {
        Theme::Light => ["#dc2626", "#2563eb", "#16a34a", "#d97706", "#7c3aed"],
        Theme::Dark => ["#f87171", "#60a5fa", "#4ade80", "#fbbf24", "#a78bfa"],
    }
}

#[component]
pub fn VisualizationView(theme: ThemeContext) -> impl IntoView {
    let palette = move || chart_palette(theme.get_theme());

    view! {
        <section class="view view--visualization">
            <PageHeader title="Visualization" subtitle="Dataset and feature charts">
                <div class="palette" aria-label="Chart palette">
                    {move || palette()
                        .into_iter()
                        .map(|color| view! {
                            <span class="palette__swatch" style=format!("background-color: {}", color)></span>
                        })
                        .collect_view()}
                </div>
            </PageHeader>

            <div class="card-grid">
                {CHART_PANELS
                    .into_iter()
                    .map(|(title, caption)| view! {
                        <div class="chart-card">
                            <div class="chart-card__title">{title}</div>
                            <div class="chart-card__canvas"></div>
                            <p class="chart-card__caption">{caption}</p>
                        </div>
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
    fn test_palette_differs_per_theme() {
        assert_ne!(chart_palette(Theme::Light), chart_palette(Theme::Dark));
        assert_eq!(chart_palette(Theme::Light).len(), 5);
    }
}

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Tooltip, TooltipConfig};
use crate::shared::icons::icon;
use crate::shared::query::QueryClient;
use crate::shared::toast::ToastService;
use crate::shared::watchlist::WatchlistContext;
use contracts::watchlist::WatchlistItem;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const FEATURED_QUERY_KEY: &str = "recommendations/featured";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturedMovie {
    pub movie_id: u64,
    pub title: String,
    pub year: u16,
    pub genres: Vec<String>,
}

impl FeaturedMovie {
    fn to_item(&self) -> WatchlistItem {
        WatchlistItem::new(self.movie_id, self.title.clone())
            .with_year(self.year)
            .with_genres(self.genres.iter().cloned())
    }
}

const FEATURED: [(u64, &str, u16, &[&str]); 5] = [
    (19995, "Avatar", 2009, &["Action", "Adventure", "Science Fiction"]),
    (155, "The Dark Knight", 2008, &["Drama", "Action", "Crime"]),
    (27205, "Inception", 2010, &["Action", "Thriller", "Science Fiction"]),
    (157336, "Interstellar", 2014, &["Adventure", "Drama", "Science Fiction"]),
    (680, "Pulp Fiction", 1994, &["Thriller", "Crime"]),
];

fn load_featured() -> Vec<FeaturedMovie> {
    FEATURED
        .into_iter()
        .map(|(movie_id, title, year, genres)| FeaturedMovie {
            movie_id,
            title: title.to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        })
        .collect()
}

fn fetch_featured(query_client: QueryClient) -> Vec<FeaturedMovie> {
    query_client.fetch_query(FEATURED_QUERY_KEY, load_featured)
}

/// Adds every movie not already saved. Returns how many were added.
fn save_all(watchlist: WatchlistContext, movies: &[FeaturedMovie]) -> usize {
    movies
        .iter()
        .filter(|movie| watchlist.add(movie.to_item()))
        .count()
}

/// Saves the picks and reports the outcome; nothing new to add is an error toast.
fn save_picks(watchlist: WatchlistContext, toasts: ToastService, movies: &[FeaturedMovie]) -> usize {
    let added = save_all(watchlist, movies);
    if added == 0 {
        toasts.error(
            "Already on your watchlist",
            Some("Every featured pick is saved".to_string()),
        );
    } else {
        toasts.toast("Watchlist updated", Some(saved_message(added)));
    }
    added
}

fn saved_message(added: usize) -> String {
    match added {
        1 => "1 pick saved".to_string(),
        n => format!("{} picks saved", n),
    }
}

fn watchlist_tooltip(on_list: bool) -> &'static str {
    if on_list {
        "Remove from watchlist"
    } else {
        "Add to watchlist"
    }
}

#[component]
pub fn RecommendationsView(
    query_client: QueryClient,
    watchlist: WatchlistContext,
    toasts: ToastService,
    tooltips: TooltipConfig,
) -> impl IntoView {
    let featured = StoredValue::new(fetch_featured(query_client));

    let toggle = move |item: WatchlistItem| {
        let title = item.display_title();
        if watchlist.toggle(item) {
            toasts.toast("Added to watchlist", Some(title));
        } else {
            toasts.toast("Removed from watchlist", Some(title));
        }
    };

    let remove = move |movie_id: u64| {
        if let Some(item) = watchlist.remove(movie_id) {
            toasts.toast("Removed from watchlist", Some(item.display_title()));
        }
    };

    let on_save_all = Callback::new(move |_: leptos::ev::MouseEvent| {
        featured.with_value(|movies| save_picks(watchlist, toasts, movies));
    });

    view! {
        <section class="view view--recommendations">
            <PageHeader title="Recommendations" subtitle="Featured picks and your saved movies">
                <Button variant="outline" size="sm" test_id="button-save-all" on_click=on_save_all>
                    {icon("plus")}
                    "Save all picks"
                </Button>
            </PageHeader>

            <div class="movie-list">
                {featured
                    .get_value()
                    .into_iter()
                    .map(|movie| {
                        let movie_id = movie.movie_id;
                        let item = movie.to_item();
                        let on_list = move || watchlist.contains(movie_id);
                        view! {
                            <div class="movie-row" data-testid=format!("row-movie-{}", movie_id)>
                                <div class="movie-row__info">
                                    <div class="movie-row__title">{format!("{} ({})", movie.title, movie.year)}</div>
                                    <div class="movie-row__genres">
                                        {movie.genres.into_iter().map(|g| view! {
                                            <Badge variant="secondary">{g}</Badge>
                                        }).collect_view()}
                                    </div>
                                </div>
                                <Tooltip
                                    config=tooltips
                                    text=Signal::derive(move || watchlist_tooltip(on_list()).to_string())
                                >
                                    <button
                                        type="button"
                                        class="button button--outline button--icon"
                                        data-testid=format!("button-watchlist-{}", movie_id)
                                        on:click=move |_| toggle(item.clone())
                                    >
                                        {move || if on_list() { icon("check") } else { icon("plus") }}
                                    </button>
                                </Tooltip>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <h3 class="section-title">
                {move || format!("Your watchlist ({})", watchlist.count())}
            </h3>
            <Show
                when=move || { watchlist.count() > 0 }
                fallback=|| view! { <p class="muted">"Nothing saved yet."</p> }
            >
                <ul class="watchlist">
                    <For
                        each=move || watchlist.items()
                        key=|item| item.movie_id
                        children=move |item: WatchlistItem| {
                            let movie_id = item.movie_id;
                            view! {
                                <li class="watchlist__item">
                                    <span>{item.display_title()}</span>
                                    <Button
                                        variant="ghost"
                                        size="icon"
                                        test_id=format!("button-remove-{}", movie_id)
                                        on_click=Callback::new(move |_: leptos::ev::MouseEvent| remove(movie_id))
                                    >
                                        {icon("trash")}
                                    </Button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastVariant;

    #[test]
    fn test_featured_ids_unique() {
        let mut ids: Vec<u64> = load_featured().iter().map(|m| m.movie_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEATURED.len());
    }

    #[test]
    fn test_featured_to_item() {
        let item = load_featured()[1].to_item();
        assert_eq!(item.display_title(), "The Dark Knight (2008)");
        assert_eq!(item.genres, vec!["Drama", "Action", "Crime"]);
    }

    #[test]
    fn test_featured_cached_under_recommendations() {
        let owner = Owner::new();
        owner.with(|| {
            let client = QueryClient::new(300);
            let movies = fetch_featured(client);
            assert_eq!(movies.len(), 5);
            assert_eq!(
                client.get_query_data::<Vec<FeaturedMovie>>(FEATURED_QUERY_KEY),
                Some(movies)
            );
            assert_eq!(client.invalidate_queries("recommendations"), 1);
            assert!(client.is_empty());
        });
    }

    #[test]
    fn test_save_all_skips_saved_movies() {
        let owner = Owner::new();
        owner.with(|| {
            let watchlist = WatchlistContext::new();
            let movies = load_featured();
            watchlist.add(movies[0].to_item());

            assert_eq!(save_all(watchlist, &movies), 4);
            assert_eq!(watchlist.count(), 5);
            assert_eq!(save_all(watchlist, &movies), 0);
            assert_eq!(watchlist.count(), 5);
        });
    }

    #[test]
    fn test_duplicate_save_reports_error() {
        let owner = Owner::new();
        owner.with(|| {
            let watchlist = WatchlistContext::new();
            let toasts = ToastService::new(3, 5000);
            let movies = load_featured();

            assert_eq!(save_picks(watchlist, toasts, &movies), 5);
            assert_eq!(toasts.toasts()[0].variant, ToastVariant::Default);

            assert_eq!(save_picks(watchlist, toasts, &movies), 0);
            let shown = toasts.toasts();
            assert_eq!(shown.len(), 2);
            assert_eq!(shown[0].variant, ToastVariant::Destructive);
            assert_eq!(shown[0].title, "Already on your watchlist");
        });
    }

    #[test]
    fn test_messages() {
        assert_eq!(saved_message(1), "1 pick saved");
        assert_eq!(saved_message(3), "3 picks saved");
        assert_eq!(watchlist_tooltip(true), "Remove from watchlist");
        assert_eq!(watchlist_tooltip(false), "Add to watchlist");
    }
}

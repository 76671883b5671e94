use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "default", "secondary", "outline", "destructive"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_variant_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("default") {
        "secondary" => "badge--secondary",
        "outline" => "badge--outline",
        "destructive" => "badge--destructive",
        _ => "badge--default",
    }
}

/// Pulsing dot used inside status badges.
#[component]
pub fn StatusDot() -> impl IntoView {
    view! { <span class="status-dot status-dot--online status-dot--pulse"></span> }
}

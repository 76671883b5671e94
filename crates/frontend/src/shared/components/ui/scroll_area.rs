use leptos::prelude::*;

/// Horizontally scrollable strip; the native scrollbar is hidden via CSS.
#[component]
pub fn ScrollArea(
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("scroll-area scroll-area--horizontal {}", class.get().unwrap_or_default())>
            <div class="scroll-area__viewport">
                {children()}
            </div>
        </div>
    }
}

use leptos::prelude::*;

/// Button component with variants (default, outline, ghost, destructive) and sizes (default, sm, icon)
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Value of the `data-testid` attribute
    #[prop(optional, into)]
    test_id: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        button_classes(
            variant.get().as_deref(),
            size.get().as_deref(),
            class.get().as_deref(),
        )
    };

    view! {
        <button
            type="button"
            class=classes
            data-testid=move || test_id.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn button_classes(variant: Option<&str>, size: Option<&str>, extra: Option<&str>) -> String {
    let variant_class = match variant.unwrap_or("default") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "destructive" => "button--destructive",
        _ => "button--primary",
    };
    let size_class = match size {
        Some("sm") => " button--sm",
        Some("icon") => " button--icon",
        _ => "",
    };
    match extra {
        Some(extra) if !extra.is_empty() => format!("button {}{} {}", variant_class, size_class, extra),
        _ => format!("button {}{}", variant_class, size_class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(button_classes(None, None, None), "button button--primary");
        assert_eq!(
            button_classes(Some("outline"), Some("sm"), Some("w-full")),
            "button button--outline button--sm w-full"
        );
        assert_eq!(button_classes(Some("ghost"), Some("icon"), Some("")), "button button--ghost button--icon");
    }
}

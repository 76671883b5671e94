use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shared tooltip settings, built once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Hover time before a tooltip opens.
    pub delay_ms: u32,
}

impl TooltipConfig {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

/// Open state of one tooltip. Every enter or leave bumps `generation`, so a
/// delay timer only opens the tooltip if nothing happened since it started.
#[derive(Clone, Copy)]
struct HoverGate {
    generation: RwSignal<u64>,
    open: RwSignal<bool>,
}

impl HoverGate {
    fn new() -> Self {
        Self {
            generation: RwSignal::new(0),
            open: RwSignal::new(false),
        }
    }

    /// Pointer entered; returns the token the delay timer must present.
    fn begin(&self) -> u64 {
        self.generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    fn end(&self) {
        self.generation.update(|g| *g += 1);
        self.open.set(false);
    }

    /// Delay elapsed for `token`. Stale tokens and unmounted tooltips are ignored.
    fn fire(&self, token: u64) -> bool {
        if self.generation.try_get_untracked() != Some(token) {
            return false;
        }
        let _ = self.open.try_set(true);
        true
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }
}

/// Tooltip shown after hovering (or focusing) the wrapped content.
#[component]
pub fn Tooltip(
    config: TooltipConfig,
    /// Tooltip text
    #[prop(into)]
    text: Signal<String>,
    children: Children,
) -> impl IntoView {
    let gate = HoverGate::new();

    let show = move || {
        let token = gate.begin();
        let delay = config.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            gate.fire(token);
        });
    };
    let hide = move || gate.end();

    view! {
        <span
            class="tooltip"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
        >
            {children()}
            <Show when=move || gate.is_open()>
                <span class="tooltip__content" role="tooltip">
                    {move || text.get()}
                </span>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_does_not_open() {
        let owner = Owner::new();
        owner.with(|| {
            let gate = HoverGate::new();
            let first = gate.begin();
            gate.end();
            let second = gate.begin();

            assert!(!gate.fire(first));
            assert!(!gate.is_open());
            assert!(gate.fire(second));
            assert!(gate.is_open());
        });
    }

    #[test]
    fn test_leave_closes_and_cancels() {
        let owner = Owner::new();
        owner.with(|| {
            let gate = HoverGate::new();
            let token = gate.begin();
            assert!(gate.fire(token));
            gate.end();
            assert!(!gate.is_open());
            assert!(!gate.fire(token));
            assert!(!gate.is_open());
        });
    }
}

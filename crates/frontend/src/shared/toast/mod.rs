//! Toast notifications.
//!
//! `ToastService` is the handle views use to raise notifications;
//! `Toaster` renders them and auto-dismisses each one after a delay.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast toast--default",
            ToastVariant::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Newest-first list of visible toasts, capped at `limit`.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    limit: usize,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Pushes to the front; the oldest toasts beyond the limit are dropped.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.insert(0, toast);
        self.toasts.truncate(self.limit);
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(limit: usize, duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(limit)),
            duration_ms,
        }
    }

    /// Показать уведомление
    pub fn toast(&self, title: impl Into<String>, description: Option<String>) -> Uuid {
        self.push(title.into(), description, ToastVariant::Default)
    }

    /// Показать уведомление об ошибке
    pub fn error(&self, title: impl Into<String>, description: Option<String>) -> Uuid {
        self.push(title.into(), description, ToastVariant::Destructive)
    }

    pub fn dismiss(&self, id: Uuid) {
        // The service may outlive its owner when a timer fires late.
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn push(&self, title: String, description: Option<String>, variant: ToastVariant) -> Uuid {
        let id = Uuid::new_v4();
        log::info!("toast: {}", title);
        self.queue.update(|q| {
            q.push(Toast {
                id,
                title,
                description,
                variant,
            })
        });
        id
    }
}

/// Renders active toasts; each one removes itself after the service's duration.
#[component]
pub fn Toaster(toasts: ToastService) -> impl IntoView {
    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let duration = toasts.duration_ms;
                    spawn_local(async move {
                        TimeoutFuture::new(duration).await;
                        toasts.dismiss(id);
                    });

                    view! {
                        <li class=toast.variant.css_class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                {toast.description.map(|d| view! {
                                    <div class="toast__description">{d}</div>
                                })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(title: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    #[test]
    fn test_queue_is_newest_first_and_capped() {
        let mut queue = ToastQueue::new(2);
        queue.push(toast("first"));
        queue.push(toast("second"));
        queue.push(toast("third"));
        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::new(3);
        let a = toast("a");
        let a_id = a.id;
        queue.push(a);
        queue.push(toast("b"));
        assert!(queue.dismiss(a_id));
        assert!(!queue.dismiss(a_id));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let mut queue = ToastQueue::new(0);
        queue.push(toast("only"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_service_variants() {
        let owner = Owner::new();
        owner.with(|| {
            let service = ToastService::new(3, 5000);
            let ok = service.toast("Saved", None);
            service.error("Failed", Some("network".to_string()));
            let toasts = service.toasts();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[0].variant, ToastVariant::Destructive);
            assert_eq!(toasts[1].variant, ToastVariant::Default);
            service.dismiss(ok);
            assert_eq!(service.toasts().len(), 1);
        });
    }
}

//! Transient notifications stacked in a corner of the screen.
//!
//! A [`Toaster`] lives in context. Pushing a toast posts its id to a coroutine
//! owned by the app root, which runs every expiry timer itself. Timers therefore
//! outlive the component that raised the toast, e.g. a form that navigates away
//! right after reporting success.

use std::time::Duration;

use dioxus::prelude::*;
use futures_channel::mpsc::{UnboundedReceiver, UnboundedSender};
use futures_util::future::{self, Either, LocalBoxFuture};
use futures_util::stream::FuturesUnordered;
use futures_util::StreamExt;
use tracing::debug;

use crate::context::{use_locale, use_toasts};
use crate::core::timing;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    expiry: CopyValue<UnboundedSender<u64>>,
}

/// Create the toaster for the app root. Toasts disappear after `lifetime`.
pub fn use_toaster(lifetime: Duration) -> Toaster {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0_u64);

    let expiry = use_coroutine(move |rx: UnboundedReceiver<u64>| {
        let mut toasts = toasts;
        run_expiry(rx, lifetime, move |id| {
            debug!(id, "toast expired");
            toasts.write().retain(|toast| toast.id != id);
        })
    });

    use_hook(|| Toaster {
        toasts,
        next_id,
        expiry: CopyValue::new(expiry.tx()),
    })
}

impl Toaster {
    pub fn info(self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.push(ToastKind::Info, title.into(), description)
    }

    pub fn error(self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.push(ToastKind::Error, title.into(), description)
    }

    pub fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    /// Current toasts, oldest first. Subscribes the caller.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    fn push(mut self, kind: ToastKind, title: String, description: Option<String>) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            kind,
            title,
            description,
        });

        if self.expiry.read().unbounded_send(id).is_err() {
            debug!(id, "expiry loop stopped; toast stays until dismissed");
        }
        id
    }
}

enum Step {
    Scheduled(Option<u64>),
    Expired(Option<u64>),
}

/// Wait `lifetime` after each id arrives on `rx`, then hand it to `expire`.
/// Timers run concurrently. Once `rx` closes, pending timers still fire before
/// the loop returns.
pub(crate) async fn run_expiry(
    mut rx: UnboundedReceiver<u64>,
    lifetime: Duration,
    mut expire: impl FnMut(u64),
) {
    let timer = move |id: u64| -> LocalBoxFuture<'static, u64> {
        Box::pin(async move {
            timing::sleep(lifetime).await;
            id
        })
    };
    let mut pending: FuturesUnordered<LocalBoxFuture<'static, u64>> = FuturesUnordered::new();

    loop {
        let step = if pending.is_empty() {
            Step::Scheduled(rx.next().await)
        } else {
            match future::select(rx.next(), pending.next()).await {
                Either::Left((id, _)) => Step::Scheduled(id),
                Either::Right((id, _)) => Step::Expired(id),
            }
        };

        match step {
            Step::Scheduled(Some(id)) => pending.push(timer(id)),
            Step::Scheduled(None) => break,
            Step::Expired(Some(id)) => expire(id),
            Step::Expired(None) => {}
        }
    }

    while let Some(id) = pending.next().await {
        expire(id);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toasts();
    let locale = use_locale();
    let dismiss_label = t!(locale, "common-dismiss");

    rsx! {
        div { class: "toast-stack", role: "status", aria_live: "polite",
            {toaster.toasts().into_iter().map(|toast| {
                let id = toast.id;
                rsx! {
                    div { key: "{id}", class: "toast {toast.kind.class()}",
                        div { class: "toast__body",
                            strong { class: "toast__title", "{toast.title}" }
                            if let Some(description) = &toast.description {
                                p { class: "toast__description", "{description}" }
                            }
                        }
                        button {
                            class: "toast__dismiss",
                            r#type: "button",
                            aria_label: "{dismiss_label}",
                            onclick: move |_| toaster.dismiss(id),
                            "×"
                        }
                    }
                }
            })}
        }
    }
}

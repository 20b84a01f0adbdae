//! Toast Notifications
//!
//! Browser notification sink: every message is logged, shown as a toast,
//! and dismissed after a timeout or on click.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::notify::{log_notification, NotificationKind, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u64>,
    timeout_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>, timeout_ms: u32) -> Self {
        Self {
            toasts,
            next_id: Cell::new(1),
            timeout_ms,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        log_notification(message, kind);

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let toasts = self.toasts;
        Timeout::new(self.timeout_ms, move || dismiss(toasts, id)).forget();
    }
}

fn dismiss(toasts: RwSignal<Vec<Toast>>, id: u64) {
    // The signal may already be disposed if the app unmounted
    toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
}

#[component]
pub fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class()) on:click=move |_| dismiss(toasts, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

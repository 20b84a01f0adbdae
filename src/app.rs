//! Stock Tracker Frontend App
//!
//! Wires the dashboard controller to Leptos signals, mounts the panels
//! and modals, and owns the status poller.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ApiClient, FetchTransport};
use crate::components::{EmailList, EmailModal, ItemList, ItemModal, Toast, ToastNotifier, ToastStack, TrackerStatusBadge};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dashboard::{Dashboard, DashboardView};
use crate::modal::ModalView;
use crate::notify::Notifier;
use crate::poller::Poller;
use crate::render::TrackerView;

/// Render target backed by signals; every frame replaces the last
#[derive(Clone, Copy)]
struct SignalView {
    items_html: WriteSignal<String>,
    emails_html: WriteSignal<String>,
    tracker: WriteSignal<TrackerView>,
    modal: WriteSignal<ModalView>,
}

impl DashboardView for SignalView {
    fn show_items(&self, markup: String) {
        self.items_html.set(markup);
    }

    fn show_emails(&self, markup: String) {
        self.emails_html.set(markup);
    }

    fn show_tracker(&self, view: TrackerView) {
        self.tracker.set(view);
    }

    fn show_modal(&self, view: ModalView) {
        self.modal.set(view);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (items_html, set_items_html) = signal(String::new());
    let (emails_html, set_emails_html) = signal(String::new());
    let (tracker, set_tracker) = signal(TrackerView::default());
    let (modal, set_modal) = signal(ModalView::default());
    let toasts = RwSignal::new(Vec::<Toast>::new());

    let view_target = SignalView {
        items_html: set_items_html,
        emails_html: set_emails_html,
        tracker: set_tracker,
        modal: set_modal,
    };
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(toasts, config.notification_timeout_ms));
    let api = ApiClient::new(Rc::new(FetchTransport), notifier.clone(), config.api_base.clone());
    let ctx = AppContext::new(Dashboard::new(api, notifier, Rc::new(view_target)));
    provide_context(ctx);

    // Initial load, then poll items and tracker status
    let poller = StoredValue::new_local(Poller::default());
    let period = config.poll_interval();
    Effect::new(move |_| {
        tracing::info!(?period, "[APP] starting dashboard");
        ctx.spawn(|dashboard| async move { dashboard.start().await });
        poller.update_value(|poller| {
            poller.start(period, move || {
                let dashboard = ctx.dashboard();
                async move { dashboard.refresh().await }
            })
        });
    });
    on_cleanup(move || {
        poller.update_value(|poller| poller.stop());
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1><i class="fas fa-box"></i>" Stock Tracker"</h1>
                <TrackerStatusBadge tracker=tracker />
            </header>

            <main class="app-main">
                <ItemList markup=items_html />
                <EmailList markup=emails_html />
            </main>

            <ItemModal modal=modal />
            <EmailModal modal=modal />
            <ToastStack toasts=toasts />
        </div>
    }
}

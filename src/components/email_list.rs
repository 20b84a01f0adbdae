//! Email List
//!
//! Notification addresses with a delegated Remove handler.

use leptos::prelude::*;

use crate::components::list_action_from_click;
use crate::context::use_app_context;

#[component]
pub fn EmailList(markup: ReadSignal<String>) -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = list_action_from_click(&ev) {
            ctx.spawn(move |dashboard| async move { dashboard.dispatch(action).await });
        }
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Notification Emails"</h2>
                <button class="btn btn-primary" on:click=move |_| ctx.dashboard().show_add_email_modal()>
                    <i class="fas fa-plus"></i>" Add Email"
                </button>
            </div>
            <div id="emails-list" inner_html=move || markup.get() on:click=on_click></div>
        </section>
    }
}

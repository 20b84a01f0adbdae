//! Item List
//!
//! Mounts the rendered item cards; one delegated click handler serves
//! every Check/Edit/Delete button.

use leptos::prelude::*;

use crate::components::list_action_from_click;
use crate::context::use_app_context;

#[component]
pub fn ItemList(markup: ReadSignal<String>) -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = list_action_from_click(&ev) {
            tracing::debug!(?action, "item list action");
            ctx.spawn(move |dashboard| async move { dashboard.dispatch(action).await });
        }
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Tracked Items"</h2>
                <button class="btn btn-primary" on:click=move |_| ctx.dashboard().show_add_item_modal()>
                    <i class="fas fa-plus"></i>" Add Item"
                </button>
            </div>
            <div id="items-list" class="items-grid" inner_html=move || markup.get() on:click=on_click></div>
        </section>
    }
}

//! Item Modal
//!
//! Add/edit dialog for a tracked item. Field values are local signals,
//! re-seeded from the controller every time the modal opens.

use leptos::prelude::*;

use crate::components::is_backdrop_click;
use crate::context::use_app_context;
use crate::modal::{ItemForm, ModalState, ModalView};

#[component]
pub fn ItemModal(modal: ReadSignal<ModalView>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (pattern, set_pattern) = signal(String::new());
    let (count, set_count) = signal(String::new());

    // Pre-fill whenever the controller opens or switches the modal
    Effect::new(move |_| {
        let view = modal.get();
        if matches!(view.state, ModalState::AddItem | ModalState::EditItem(_)) {
            set_name.set(view.item_form.name);
            set_url.set(view.item_form.url);
            set_pattern.set(view.item_form.pattern);
            set_count.set(view.item_form.count);
        }
    });

    let is_open = move || matches!(modal.get().state, ModalState::AddItem | ModalState::EditItem(_));

    let save_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ItemForm {
            name: name.get(),
            url: url.get(),
            pattern: pattern.get(),
            count: count.get(),
        };
        ctx.spawn(move |dashboard| async move {
            let _ = dashboard.save_item(form).await;
        });
    };

    view! {
        <div
            id="item-modal"
            class=move || if is_open() { "modal show" } else { "modal" }
            on:click=move |ev| {
                if is_backdrop_click(&ev) {
                    ctx.dashboard().close_modal();
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 id="item-modal-title">{move || modal.get().title}</h3>
                    <button type="button" class="modal-close" on:click=move |_| ctx.dashboard().close_modal()>
                        "×"
                    </button>
                </div>
                <form id="item-form" on:submit=save_item>
                    <label for="item-name">"Name"</label>
                    <input
                        id="item-name"
                        name="name"
                        type="text"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="item-url">"URL"</label>
                    <input
                        id="item-url"
                        name="url"
                        type="url"
                        required=true
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                    <label for="item-pattern">"Out-of-stock pattern"</label>
                    <input
                        id="item-pattern"
                        name="rule_pattern"
                        type="text"
                        required=true
                        prop:value=move || pattern.get()
                        on:input=move |ev| set_pattern.set(event_target_value(&ev))
                    />
                    <label for="item-count">"Minimum matches"</label>
                    <input
                        id="item-count"
                        name="rule_count"
                        type="number"
                        min="0"
                        required=true
                        prop:value=move || count.get()
                        on:input=move |ev| set_count.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.dashboard().close_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

//! Email Modal
//!
//! Create-only dialog for a notification address.

use leptos::prelude::*;

use crate::components::is_backdrop_click;
use crate::context::use_app_context;
use crate::modal::{EmailForm, ModalState, ModalView};

#[component]
pub fn EmailModal(modal: ReadSignal<ModalView>) -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());

    // Form reset on every open
    Effect::new(move |_| {
        if modal.get().state == ModalState::AddEmail {
            set_email.set(String::new());
        }
    });

    let save_email = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = EmailForm { email: email.get() };
        ctx.spawn(move |dashboard| async move {
            let _ = dashboard.save_email(form).await;
        });
    };

    view! {
        <div
            id="email-modal"
            class=move || if modal.get().state == ModalState::AddEmail { "modal show" } else { "modal" }
            on:click=move |ev| {
                if is_backdrop_click(&ev) {
                    ctx.dashboard().close_modal();
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Add Email Address"</h3>
                    <button type="button" class="modal-close" on:click=move |_| ctx.dashboard().close_modal()>
                        "×"
                    </button>
                </div>
                <form id="email-form" on:submit=save_email>
                    <label for="email-address">"Email"</label>
                    <input
                        id="email-address"
                        name="email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.dashboard().close_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Add"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

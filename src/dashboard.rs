//! Dashboard Controller
//!
//! Owns the stores and the modal controller, runs every user-facing
//! operation against the API, and pushes rendered output to a
//! [`DashboardView`]. No `RefCell` borrow is held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{self, ApiClient};
use crate::error::{ActionError, RequestError};
use crate::modal::{EmailForm, ItemForm, ModalController, ModalView};
use crate::models::TrackerStatus;
use crate::notify::{NotificationKind, Notifier};
use crate::render::{self, ListAction, TrackerView};
use crate::store::{EmailStore, ItemStore};

pub const CONFIRM_DELETE_ITEM: &str = "Are you sure you want to delete this item?";
pub const CONFIRM_DELETE_EMAIL: &str = "Are you sure you want to remove this email address?";

/// Render target plus the one blocking prompt the dashboard needs
pub trait DashboardView {
    fn show_items(&self, markup: String);
    fn show_emails(&self, markup: String);
    fn show_tracker(&self, view: TrackerView);
    fn show_modal(&self, view: ModalView);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone)]
pub struct Dashboard {
    api: ApiClient,
    notifier: Rc<dyn Notifier>,
    view: Rc<dyn DashboardView>,
    items: Rc<RefCell<ItemStore>>,
    emails: Rc<RefCell<EmailStore>>,
    modal: Rc<RefCell<ModalController>>,
}

impl Dashboard {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>, view: Rc<dyn DashboardView>) -> Self {
        Self {
            api,
            notifier,
            view,
            items: Rc::new(RefCell::new(ItemStore::default())),
            emails: Rc::new(RefCell::new(EmailStore::default())),
            modal: Rc::new(RefCell::new(ModalController::default())),
        }
    }

    /// First paint: everything once
    pub async fn start(&self) {
        let _ = self.load_items().await;
        let _ = self.load_emails().await;
        let _ = self.update_tracker_status().await;
    }

    /// Poll tick. Emails only change through this UI, so they are not polled.
    pub async fn refresh(&self) {
        let _ = self.load_items().await;
        let _ = self.update_tracker_status().await;
    }

    // ========================
    // Loaders
    // ========================

    pub async fn load_items(&self) -> Result<(), RequestError> {
        let ticket = self.items.borrow_mut().begin_load();
        match api::list_items(&self.api).await {
            Ok(loaded) => {
                let count = loaded.len();
                if self.items.borrow_mut().apply(ticket, loaded) {
                    tracing::debug!(count, "loaded items");
                    self.render_items();
                } else {
                    tracing::debug!(?ticket, "discarded stale item snapshot");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load items");
                Err(err)
            }
        }
    }

    pub async fn load_emails(&self) -> Result<(), RequestError> {
        let ticket = self.emails.borrow_mut().begin_load();
        match api::list_emails(&self.api).await {
            Ok(loaded) => {
                if self.emails.borrow_mut().apply(ticket, loaded) {
                    self.render_emails();
                } else {
                    tracing::debug!(?ticket, "discarded stale email snapshot");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load emails");
                Err(err)
            }
        }
    }

    pub async fn update_tracker_status(&self) -> Result<TrackerStatus, RequestError> {
        match api::tracker_status(&self.api).await {
            Ok(status) => {
                self.view.show_tracker(render::tracker_view(&status));
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to get tracker status");
                Err(err)
            }
        }
    }

    // ========================
    // Modals
    // ========================

    pub fn show_add_item_modal(&self) {
        self.modal.borrow_mut().show_add_item();
        self.render_modal();
    }

    pub fn edit_item(&self, id: u32) -> bool {
        let found = {
            let items = self.items.borrow();
            self.modal.borrow_mut().edit_item(&items, id)
        };
        if found {
            self.render_modal();
        } else {
            tracing::debug!(id, "edit requested for unknown item");
        }
        found
    }

    pub fn show_add_email_modal(&self) {
        self.modal.borrow_mut().show_add_email();
        self.render_modal();
    }

    /// Any close path: button, cancel, or backdrop click
    pub fn close_modal(&self) {
        self.modal.borrow_mut().close();
        self.render_modal();
    }

    pub fn modal_view(&self) -> ModalView {
        self.modal.borrow().view()
    }

    // ========================
    // Mutations
    // ========================

    /// Create or update depending on whether an item is being edited
    pub async fn save_item(&self, form: ItemForm) -> Result<(), ActionError> {
        let payload = form.to_payload().map_err(|err| self.reject(err))?;
        let editing = self.modal.borrow().editing_id();

        let saved = match editing {
            Some(id) => api::update_item(&self.api, id, &payload)
                .await
                .map(|_| "Item updated successfully"),
            None => api::create_item(&self.api, &payload)
                .await
                .map(|_| "Item added successfully"),
        };
        let message = saved.map_err(|err| {
            tracing::error!(error = %err, ?editing, "Failed to save item");
            err
        })?;

        self.notifier.notify(message, NotificationKind::Success);
        self.close_modal();
        let _ = self.load_items().await;
        Ok(())
    }

    pub async fn save_email(&self, form: EmailForm) -> Result<(), ActionError> {
        let payload = form.to_payload().map_err(|err| self.reject(err))?;

        api::create_email(&self.api, &payload).await.map_err(|err| {
            tracing::error!(error = %err, "Failed to save email");
            err
        })?;

        self.notifier.notify("Email added successfully", NotificationKind::Success);
        self.close_modal();
        let _ = self.load_emails().await;
        Ok(())
    }

    /// Returns `Ok(false)` when the user declined the prompt
    pub async fn delete_item(&self, id: u32) -> Result<bool, RequestError> {
        if !self.view.confirm(CONFIRM_DELETE_ITEM) {
            return Ok(false);
        }
        api::delete_item(&self.api, id).await.map_err(|err| {
            tracing::error!(error = %err, id, "Failed to delete item");
            err
        })?;

        self.notifier.notify("Item deleted successfully", NotificationKind::Success);
        let _ = self.load_items().await;
        Ok(true)
    }

    pub async fn delete_email(&self, id: u32) -> Result<bool, RequestError> {
        if !self.view.confirm(CONFIRM_DELETE_EMAIL) {
            return Ok(false);
        }
        api::delete_email(&self.api, id).await.map_err(|err| {
            tracing::error!(error = %err, id, "Failed to delete email");
            err
        })?;

        self.notifier.notify("Email removed successfully", NotificationKind::Success);
        let _ = self.load_emails().await;
        Ok(true)
    }

    /// Trigger a backend check and show "Checking..." right away
    pub async fn check_item(&self, id: u32) -> Result<(), RequestError> {
        api::check_item(&self.api, id).await.map_err(|err| {
            tracing::error!(error = %err, id, "Failed to check item");
            err
        })?;

        self.notifier.notify("Item check initiated", NotificationKind::Info);
        if self.items.borrow_mut().mark_checking(id) {
            self.render_items();
        }
        Ok(())
    }

    /// Route a click from one of the rendered lists
    pub async fn dispatch(&self, action: ListAction) {
        match action {
            ListAction::CheckItem(id) => {
                let _ = self.check_item(id).await;
            }
            ListAction::EditItem(id) => {
                self.edit_item(id);
            }
            ListAction::DeleteItem(id) => {
                let _ = self.delete_item(id).await;
            }
            ListAction::DeleteEmail(id) => {
                let _ = self.delete_email(id).await;
            }
        }
    }

    // ========================
    // Rendering
    // ========================

    fn render_items(&self) {
        let markup = render::render_items(self.items.borrow().all());
        self.view.show_items(markup);
    }

    fn render_emails(&self) {
        let markup = render::render_emails(self.emails.borrow().all());
        self.view.show_emails(markup);
    }

    fn render_modal(&self) {
        let view = self.modal.borrow().view();
        self.view.show_modal(view);
    }

    fn reject(&self, err: crate::error::FormError) -> ActionError {
        tracing::warn!(error = %err, "Rejected form input");
        self.notifier.notify(&err.to_string(), NotificationKind::Error);
        ActionError::Form(err)
    }
}

//! Modal Controller
//!
//! Which dialog is open, what its form holds, and which item (if any)
//! is being edited.

use crate::error::FormError;
use crate::models::{EmailPayload, Item, ItemPayload};
use crate::store::ItemStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddItem,
    EditItem(u32),
    AddEmail,
}

/// Raw values of the item form, as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemForm {
    pub name: String,
    pub url: String,
    pub pattern: String,
    pub count: String,
}

impl ItemForm {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            url: item.url.clone(),
            pattern: item.rule_pattern.clone(),
            count: item.rule_count.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<ItemPayload, FormError> {
        let name = required(&self.name, "Name")?;
        let url = required(&self.url, "URL")?;
        // Leading/trailing spaces can be part of the match text
        if self.pattern.trim().is_empty() {
            return Err(FormError::Missing("Pattern"));
        }
        let count = self.count.trim();
        let rule_count = parse_count(count).ok_or_else(|| FormError::InvalidCount(count.to_string()))?;

        Ok(ItemPayload {
            name,
            url,
            rule_pattern: self.pattern.clone(),
            rule_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailForm {
    pub email: String,
}

impl EmailForm {
    pub fn to_payload(&self) -> Result<EmailPayload, FormError> {
        Ok(EmailPayload {
            email: required(&self.email, "Email")?,
        })
    }
}

/// Number inputs may report `2.0`; any non-negative whole value is accepted
fn parse_count(text: &str) -> Option<i64> {
    if let Ok(n) = text.parse::<i64>() {
        return (n >= 0).then_some(n);
    }
    let value = text.parse::<f64>().ok()?;
    let whole = value.is_finite() && value.fract() == 0.0;
    (whole && value >= 0.0 && value < i64::MAX as f64).then(|| value as i64)
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Snapshot handed to the view whenever the modal changes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalView {
    pub state: ModalState,
    pub title: &'static str,
    pub item_form: ItemForm,
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    item_form: ItemForm,
}

impl ModalController {
    #[cfg(test)]
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn editing_id(&self) -> Option<u32> {
        match self.state {
            ModalState::EditItem(id) => Some(id),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn item_form(&self) -> &ItemForm {
        &self.item_form
    }

    pub fn show_add_item(&mut self) {
        self.item_form = ItemForm::default();
        self.state = ModalState::AddItem;
    }

    /// Pre-fill from the current snapshot. Unknown ids leave the modal alone.
    pub fn edit_item(&mut self, items: &ItemStore, id: u32) -> bool {
        let Some(item) = items.find(id) else {
            return false;
        };
        self.item_form = ItemForm::from_item(item);
        self.state = ModalState::EditItem(id);
        true
    }

    pub fn show_add_email(&mut self) {
        self.state = ModalState::AddEmail;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn view(&self) -> ModalView {
        let title = match self.state {
            ModalState::AddItem => "Add New Item",
            ModalState::EditItem(_) => "Edit Item",
            ModalState::AddEmail => "Add Email Address",
            ModalState::Closed => "",
        };
        ModalView {
            state: self.state,
            title,
            item_form: self.item_form.clone(),
        }
    }
}

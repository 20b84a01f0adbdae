//! Markup Renderers
//!
//! Pure functions from store snapshots to HTML strings. The list
//! containers mount the result with `inner_html`; buttons carry
//! `data-action`/`data-id` and are handled by one delegated listener.

use crate::models::{Email, Item, TrackerStatus};

pub const EMPTY_ITEMS_MESSAGE: &str = "No items being tracked yet. Click \"Add Item\" to get started.";
pub const EMPTY_EMAILS_MESSAGE: &str = "No email addresses configured. Add one to receive notifications.";

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn empty_state(icon: &str, message: &str) -> String {
    format!(
        r#"<div class="empty-state"><i class="fas {}"></i><p>{}</p></div>"#,
        icon,
        escape_html(message)
    )
}

pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return empty_state("fa-box-open", EMPTY_ITEMS_MESSAGE);
    }
    items.iter().map(render_item_card).collect()
}

fn render_item_card(item: &Item) -> String {
    let availability = item.availability();
    let url = escape_html(&item.url);
    let checked = match &item.last_checked {
        Some(ts) => format!("Last checked: {}", escape_html(ts)),
        None => "Not checked yet".to_string(),
    };

    format!(
        concat!(
            r#"<div class="item-card" data-item-id="{id}">"#,
            r#"<div class="item-header"><div>"#,
            r#"<div class="item-name">{name}</div>"#,
            r#"<a href="{url}" target="_blank" rel="noopener" class="item-url">{url}</a>"#,
            r#"</div>"#,
            r#"<span class="availability-badge {badge_class}">{badge}</span>"#,
            r#"</div>"#,
            r#"<div class="item-rule">Pattern: &quot;{pattern}&quot;<br>Out of stock when matches ≥ {count}</div>"#,
            r#"<div class="item-details">{checked}</div>"#,
            r#"<div class="item-actions">"#,
            r#"<button class="btn btn-sm btn-primary" data-action="check" data-id="{id}"><i class="fas fa-sync"></i> Check Now</button>"#,
            r#"<button class="btn btn-sm btn-secondary" data-action="edit" data-id="{id}"><i class="fas fa-edit"></i> Edit</button>"#,
            r#"<button class="btn btn-sm btn-danger" data-action="delete" data-id="{id}"><i class="fas fa-trash"></i> Delete</button>"#,
            r#"</div></div>"#,
        ),
        id = item.id,
        name = escape_html(&item.name),
        url = url,
        badge_class = availability.css_class(),
        badge = availability.label(),
        pattern = escape_html(&item.rule_pattern),
        count = item.rule_count,
        checked = checked,
    )
}

pub fn render_emails(emails: &[Email]) -> String {
    if emails.is_empty() {
        return empty_state("fa-envelope-open", EMPTY_EMAILS_MESSAGE);
    }
    emails
        .iter()
        .map(|email| {
            format!(
                concat!(
                    r#"<div class="email-item">"#,
                    r#"<span class="email-address">{address}</span>"#,
                    r#"<button class="btn btn-sm btn-danger" data-action="remove" data-id="{id}"><i class="fas fa-trash"></i> Remove</button>"#,
                    r#"</div>"#,
                ),
                address = escape_html(&email.email),
                id = email.id,
            )
        })
        .collect()
}

/// What the status indicator shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    pub active: bool,
    pub text: String,
}

impl Default for TrackerView {
    fn default() -> Self {
        Self {
            active: false,
            text: "Loading...".to_string(),
        }
    }
}

pub fn tracker_view(status: &TrackerStatus) -> TrackerView {
    if status.running {
        TrackerView {
            active: true,
            text: format!("Running (checking every {}s)", status.check_interval),
        }
    } else {
        TrackerView {
            active: false,
            text: "Stopped".to_string(),
        }
    }
}

/// Click on a rendered list button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    CheckItem(u32),
    EditItem(u32),
    DeleteItem(u32),
    DeleteEmail(u32),
}

impl ListAction {
    /// Decode the `data-action`/`data-id` pair of a button
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse().ok()?;
        match action {
            "check" => Some(ListAction::CheckItem(id)),
            "edit" => Some(ListAction::EditItem(id)),
            "delete" => Some(ListAction::DeleteItem(id)),
            "remove" => Some(ListAction::DeleteEmail(id)),
            _ => None,
        }
    }
}

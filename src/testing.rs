//! Test Doubles
//!
//! In-memory backend, recording sinks and fixtures shared by unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use serde_json::json;

use crate::api::{HttpRequest, HttpResponse, Method, Transport};
use crate::dashboard::DashboardView;
use crate::error::RequestError;
use crate::modal::ModalView;
use crate::models::{Email, EmailPayload, Item, ItemPayload, TrackerStatus};
use crate::notify::{NotificationKind, Notifier};
use crate::render::TrackerView;

pub fn make_item(id: u32, name: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        url: format!("https://shop.example/{}", id),
        rule_pattern: "Sold out".to_string(),
        rule_count: 1,
        is_available: None,
        last_checked: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn make_email(id: u32, address: &str) -> Email {
    Email {
        id,
        email: address.to_string(),
        is_active: Some(true),
        created_at: None,
    }
}

// ========================
// Notifier
// ========================

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.borrow().clone()
    }

    pub fn contains(&self, kind: NotificationKind, message: &str) -> bool {
        self.messages.borrow().iter().any(|(k, m)| *k == kind && m == message)
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.messages.borrow().iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.messages.borrow_mut().push((kind, message.to_string()));
    }
}

// ========================
// Transports
// ========================

/// Answers every request with the same canned result
pub struct ScriptedTransport {
    reply: Result<HttpResponse, RequestError>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse { status, body: body.to_string() }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn unreachable(message: &str) -> Self {
        Self {
            reply: Err(RequestError::new(message)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(request);
        self.reply.clone()
    }
}

/// Minimal in-memory stand-in for the tracker's REST API
pub struct FakeBackend {
    items: RefCell<Vec<Item>>,
    emails: RefCell<Vec<Email>>,
    status: Cell<TrackerStatus>,
    next_id: Cell<u32>,
    failure: RefCell<Option<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            emails: RefCell::new(Vec::new()),
            status: Cell::new(TrackerStatus { running: true, check_interval: 10 }),
            next_id: Cell::new(1),
            failure: RefCell::new(None),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    fn assign_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn seed_item(&self, name: &str, url: &str) -> u32 {
        let id = self.assign_id();
        let mut item = make_item(id, name);
        item.url = url.to_string();
        self.items.borrow_mut().push(item);
        id
    }

    pub fn seed_email(&self, address: &str) -> u32 {
        let id = self.assign_id();
        self.emails.borrow_mut().push(make_email(id, address));
        id
    }

    pub fn set_available(&self, id: u32, available: Option<bool>) {
        if let Some(item) = self.items.borrow_mut().iter_mut().find(|i| i.id == id) {
            item.is_available = available;
            item.last_checked = Some("2024-05-01 10:00:00".to_string());
        }
    }

    pub fn set_status(&self, running: bool, check_interval: u64) {
        self.status.set(TrackerStatus { running, check_interval });
    }

    /// The next request gets this response instead of being handled
    pub fn fail_next(&self, status: u16, body: &str) {
        *self.failure.borrow_mut() = Some(HttpResponse { status, body: body.to_string() });
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    pub fn emails(&self) -> Vec<Email> {
        self.emails.borrow().clone()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request.url.trim_start_matches('/').split('/').collect();
        let id = segments.get(2).and_then(|s| s.parse::<u32>().ok());

        match (request.method, segments.as_slice()) {
            (Method::Get, ["api", "items"]) => {
                reply(200, self.items().iter().map(item_row).collect::<serde_json::Value>())
            }
            (Method::Post, ["api", "items"]) => match decode::<ItemPayload>(request) {
                Some(payload) => {
                    let id = self.assign_id();
                    self.items.borrow_mut().push(Item {
                        id,
                        name: payload.name,
                        url: payload.url,
                        rule_pattern: payload.rule_pattern,
                        rule_count: payload.rule_count,
                        is_available: None,
                        last_checked: None,
                        created_at: None,
                        updated_at: None,
                    });
                    reply(201, json!({"id": id, "message": "Item added successfully"}))
                }
                None => bad_request(),
            },
            (Method::Put, ["api", "items", _]) => {
                let Some(payload) = decode::<ItemPayload>(request) else {
                    return bad_request();
                };
                let mut items = self.items.borrow_mut();
                match items.iter_mut().find(|i| Some(i.id) == id) {
                    Some(item) => {
                        item.name = payload.name;
                        item.url = payload.url;
                        item.rule_pattern = payload.rule_pattern;
                        item.rule_count = payload.rule_count;
                        reply(200, json!({"message": "Item updated successfully"}))
                    }
                    None => not_found("Item not found"),
                }
            }
            (Method::Delete, ["api", "items", _]) => {
                self.items.borrow_mut().retain(|i| Some(i.id) != id);
                reply(200, json!({"message": "Item deleted successfully"}))
            }
            (Method::Post, ["api", "items", _, "check"]) => {
                if self.items.borrow().iter().any(|i| Some(i.id) == id) {
                    reply(200, json!({"message": "Check initiated"}))
                } else {
                    not_found("Item not found")
                }
            }
            (Method::Get, ["api", "emails"]) => {
                reply(200, self.emails().iter().map(email_row).collect::<serde_json::Value>())
            }
            (Method::Post, ["api", "emails"]) => match decode::<EmailPayload>(request) {
                Some(payload) => {
                    let id = self.assign_id();
                    self.emails.borrow_mut().push(make_email(id, &payload.email));
                    reply(201, json!({"message": "Email added successfully"}))
                }
                None => bad_request(),
            },
            (Method::Delete, ["api", "emails", _]) => {
                self.emails.borrow_mut().retain(|e| Some(e.id) != id);
                reply(200, json!({"message": "Email deleted successfully"}))
            }
            (Method::Get, ["api", "tracker", "status"]) => reply(200, json!(self.status.get())),
            _ => not_found("Not found"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(failure) = self.failure.borrow_mut().take() {
            return Ok(failure);
        }
        Ok(self.handle(&request))
    }
}

/// Rows as the SQLite-backed API sends them: BOOLEAN columns are `0`/`1`
fn item_row(item: &Item) -> serde_json::Value {
    json!({
        "id": item.id,
        "url": item.url,
        "name": item.name,
        "rule_pattern": item.rule_pattern,
        "rule_count": item.rule_count,
        "is_available": item.is_available.map(u8::from),
        "last_checked": item.last_checked,
        "created_at": item.created_at,
        "updated_at": item.updated_at,
    })
}

fn email_row(email: &Email) -> serde_json::Value {
    json!({
        "id": email.id,
        "email": email.email,
        "is_active": email.is_active.map(u8::from),
        "created_at": email.created_at,
    })
}

fn decode<T: serde::de::DeserializeOwned>(request: &HttpRequest) -> Option<T> {
    request.body.as_deref().and_then(|body| serde_json::from_str(body).ok())
}

fn reply(status: u16, body: serde_json::Value) -> HttpResponse {
    HttpResponse { status, body: body.to_string() }
}

fn bad_request() -> HttpResponse {
    reply(400, json!({"error": "Invalid request body"}))
}

fn not_found(message: &str) -> HttpResponse {
    reply(404, json!({"error": message}))
}

// ========================
// View
// ========================

/// Render target that keeps every frame and answers prompts from a script
pub struct RecordingView {
    items: RefCell<Vec<String>>,
    emails: RefCell<Vec<String>>,
    tracker: RefCell<Vec<TrackerView>>,
    modals: RefCell<Vec<ModalView>>,
    prompts: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            emails: RefCell::new(Vec::new()),
            tracker: RefCell::new(Vec::new()),
            modals: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }
}

impl RecordingView {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn last_items(&self) -> String {
        self.items.borrow().last().cloned().unwrap_or_default()
    }

    pub fn item_renders(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn last_emails(&self) -> String {
        self.emails.borrow().last().cloned().unwrap_or_default()
    }

    pub fn last_tracker(&self) -> TrackerView {
        self.tracker.borrow().last().cloned().unwrap_or_default()
    }

    pub fn last_modal(&self) -> ModalView {
        self.modals.borrow().last().cloned().unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl DashboardView for RecordingView {
    fn show_items(&self, markup: String) {
        self.items.borrow_mut().push(markup);
    }

    fn show_emails(&self, markup: String) {
        self.emails.borrow_mut().push(markup);
    }

    fn show_tracker(&self, view: TrackerView) {
        self.tracker.borrow_mut().push(view);
    }

    fn show_modal(&self, view: ModalView) {
        self.modals.borrow_mut().push(view);
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

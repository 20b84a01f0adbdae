//! API Client
//!
//! JSON request/response wrapper. Every failure is reported to the
//! notification sink exactly once before it is returned.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::transport::{HttpRequest, Method, Transport};
use crate::error::RequestError;
use crate::notify::{NotificationKind, Notifier};

/// Caller-supplied parts of a request, merged over the JSON defaults
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::Get)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    #[cfg(test)]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, RequestError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| RequestError::new(format!("Could not encode request: {}", e)))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    notifier: Rc<dyn Notifier>,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, notifier: Rc<dyn Notifier>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            notifier,
            base_url: base_url.into(),
        }
    }

    /// Send a request and return the decoded JSON body
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<Value, RequestError> {
        match self.exchange(path, options).await {
            Ok(value) => Ok(value),
            Err(err) => Err(self.report(path, err)),
        }
    }

    /// Like [`ApiClient::call`], decoding into `T`
    pub async fn call_as<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, RequestError> {
        let result = match self.exchange(path, options).await {
            Ok(value) => serde_json::from_value(value)
                .map_err(|e| RequestError::new(format!("Unexpected response: {}", e))),
            Err(err) => Err(err),
        };
        result.map_err(|err| self.report(path, err))
    }

    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    async fn exchange(&self, path: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
                Some(slot) => slot.1 = value,
                None => headers.push((name, value)),
            }
        }

        let request = HttpRequest {
            method: options.method,
            url: self.url(path),
            headers,
            body: options.body,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(error_from_body(&response.body));
        }
        parse_body(&response.body)
    }

    fn report(&self, path: &str, err: RequestError) -> RequestError {
        tracing::error!(path, error = %err, "API error");
        self.notifier.notify(&err.message, NotificationKind::Error);
        err
    }
}

fn error_from_body(body: &str) -> RequestError {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .map(RequestError::new)
        .unwrap_or_else(RequestError::generic)
}

fn parse_body(body: &str) -> Result<Value, RequestError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| RequestError::new(format!("Invalid JSON response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE;
    use crate::testing::{RecordingNotifier, ScriptedTransport};

    fn client(transport: &Rc<ScriptedTransport>, notifier: &Rc<RecordingNotifier>) -> ApiClient {
        ApiClient::new(transport.clone(), notifier.clone(), "")
    }

    #[tokio::test]
    async fn test_attaches_json_header_and_merges_options() {
        let transport = Rc::new(ScriptedTransport::ok(r#"{"message":"ok"}"#));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let options = RequestOptions::new(Method::Post)
            .header("X-Trace", "abc")
            .json(&serde_json::json!({"email": "a@b.io"}))
            .unwrap();
        let value = api.call("/api/emails", options).await.unwrap();

        assert_eq!(value["message"], "ok");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/api/emails");
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert_eq!(sent[0].header("X-Trace"), Some("abc"));
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"email":"a@b.io"}"#));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_caller_can_override_content_type() {
        let transport = Rc::new(ScriptedTransport::ok("{}"));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let options = RequestOptions::default().header("content-type", "text/plain");
        api.call("/x", options).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].headers.len(), 1);
        assert_eq!(sent[0].header("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_error_field_becomes_message_and_is_notified_once() {
        let transport = Rc::new(ScriptedTransport::status(404, r#"{"error":"Item not found"}"#));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let err = api.call("/api/items/9/check", RequestOptions::new(Method::Post)).await.unwrap_err();

        assert_eq!(err.message, "Item not found");
        assert_eq!(notifier.messages(), vec![(NotificationKind::Error, "Item not found".to_string())]);
    }

    #[tokio::test]
    async fn test_missing_error_field_falls_back_to_generic() {
        let transport = Rc::new(ScriptedTransport::status(500, "<html>oops</html>"));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let err = api.call("/api/items", RequestOptions::default()).await.unwrap_err();
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_an_error() {
        let transport = Rc::new(ScriptedTransport::ok("not json"));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let err = api.call("/api/items", RequestOptions::default()).await.unwrap_err();
        assert!(err.message.starts_with("Invalid JSON response"));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = Rc::new(ScriptedTransport::status(204, ""));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let value = api.call("/api/emails/3", RequestOptions::new(Method::Delete)).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_transport_failure_is_notified() {
        let transport = Rc::new(ScriptedTransport::unreachable("Failed to fetch"));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let err = api.call("/api/tracker/status", RequestOptions::default()).await.unwrap_err();
        assert_eq!(err.message, "Failed to fetch");
        assert_eq!(notifier.messages()[0].0, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_typed_decode_mismatch_is_notified() {
        let transport = Rc::new(ScriptedTransport::ok(r#"{"running":"yes"}"#));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = client(&transport, &notifier);

        let result = api
            .call_as::<crate::models::TrackerStatus>("/api/tracker/status", RequestOptions::default())
            .await;
        assert!(result.unwrap_err().message.starts_with("Unexpected response"));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[test]
    fn test_base_url_join() {
        let transport = Rc::new(ScriptedTransport::ok("{}"));
        let notifier = Rc::new(RecordingNotifier::default());
        let api = ApiClient::new(transport, notifier, "http://localhost:5000/");
        assert_eq!(api.url("/api/items"), "http://localhost:5000/api/items");
    }
}

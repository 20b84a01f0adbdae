//! Browser Fetch Transport
//!
//! `Transport` backed by `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::RequestError;

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let window = web_sys::window().ok_or_else(|| RequestError::new("No window available"))?;

        let headers = Headers::new().map_err(js_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_error)?;
        }

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// Best-effort message out of a thrown JS value
fn js_error(value: JsValue) -> RequestError {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return RequestError::new(String::from(err.message()));
    }
    match value.as_string() {
        Some(message) => RequestError::new(message),
        None => RequestError::new(format!("{:?}", value)),
    }
}

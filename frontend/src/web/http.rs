//! `fetch` client
//!
//! Requests are described as plain data ([`HttpRequest`]) and only turned
//! into a `web_sys::Request` when sent.

use bairros_shared::HttpMethod;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("could not build {method} {url}: {reason}")]
    Build {
        method: &'static str,
        url: String,
        reason: String,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("unreadable response body: {0}")]
    Body(String),
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json_wasm::de::Error),
}

/// Message of a rejected promise or thrown JS value.
fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// A request that has not been sent yet.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Attaches an already encoded JSON document.
    pub fn json_body(self, body: String) -> Self {
        let mut req = self.header("Content-Type", JSON_CONTENT_TYPE);
        req.body = Some(body);
        req
    }

    fn build_error(&self, reason: String) -> HttpError {
        HttpError::Build {
            method: self.method.as_str(),
            url: self.url.clone(),
            reason,
        }
    }

    fn to_web_request(&self) -> Result<Request, HttpError> {
        let headers = Headers::new().map_err(|e| self.build_error(js_reason(e)))?;
        for (name, value) in &self.headers {
            headers
                .set(name, value)
                .map_err(|e| self.build_error(js_reason(e)))?;
        }

        let init = RequestInit::new();
        init.set_method(self.method.as_str());
        init.set_headers(&headers.into());
        if let Some(body) = &self.body {
            init.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&self.url, &init).map_err(|e| self.build_error(js_reason(e)))
    }

    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let request = self.to_web_request()?;
        let window = web_sys::window().ok_or_else(|| self.build_error("no window".to_string()))?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::Network(js_reason(e)))?;
        let inner = value
            .dyn_into::<Response>()
            .map_err(|e| HttpError::Network(js_reason(e)))?;

        Ok(HttpResponse { inner })
    }
}

pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 2xx
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self.inner.text().map_err(|e| HttpError::Body(js_reason(e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::Body(js_reason(e)))?
            .as_string()
            .ok_or_else(|| HttpError::Body("body is not text".to_string()))
    }

    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let text = self.text().await?;
        Ok(serde_json_wasm::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_sets_content_type() {
        let req = HttpRequest::new(HttpMethod::Post, "/api/neighborhood-comment")
            .json_body(r#"{"content":"hi"}"#.to_string());

        assert_eq!(req.headers, vec![("Content-Type", JSON_CONTENT_TYPE.to_string())]);
        assert_eq!(req.body.as_deref(), Some(r#"{"content":"hi"}"#));
    }

    #[test]
    fn build_error_names_the_request() {
        let req = HttpRequest::new(HttpMethod::Get, "/api/cities");
        assert_eq!(
            req.build_error("bad url".to_string()).to_string(),
            "could not build GET /api/cities: bad url"
        );
    }
}

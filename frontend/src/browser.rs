use async_trait::async_trait;
use gloo::dialogs;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::window;
use shared::api::{ApiError, FormTransport};
use shared::constants::{CSRF_HEADER, FORM_CONTENT_TYPE};
use shared::view::{Notifier, Sleeper};
use crate::config::{csrf_token, get_api_base_url};

/// `fetch`-backed transport that attaches the page's CSRF token.
pub struct BrowserTransport;

#[async_trait(?Send)]
impl FormTransport for BrowserTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<String, ApiError> {
        let request = Request::post(&format!("{}{}", get_api_base_url(), path))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header(CSRF_HEADER, &csrf_token())
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("{} responded with status {}", path, response.status());
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep_ms(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

pub fn alert(message: &str) {
    dialogs::alert(message);
}

pub fn confirm(message: &str) -> bool {
    dialogs::confirm(message)
}

pub fn navigate(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }
}

pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        confirm(message)
    }

    fn navigate(&self, url: &str) {
        navigate(url);
    }
}

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use gloo_net::http::{RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{extract_detail, ApiError};
use crate::shared::config::{self, DEFAULT_CONTENT_TYPE, REQUEST_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        })
    }
}

/// Thin wrapper over `gloo_net` that fixes base URL, timeout and headers,
/// hands back only the decoded body and logs every failure.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(config::api_base(), REQUEST_TIMEOUT_MS)
    }
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn url(&self, path: &str) -> String {
        config::join_url(&self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Get, self.url(path), None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.send(HttpMethod::Post, self.url(path), Some(body)).await
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Post, self.url(path), None).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.send(HttpMethod::Put, self.url(path), Some(body)).await
    }

    /// GET an absolute URL, bypassing the base (used for the health probe)
    pub async fn get_absolute<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Get, url.to_string(), None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let result = self.dispatch(method, &url, body).await;
        if let Err(e) = &result {
            log::error!("API request failed: {} {}: {}", method, url, e);
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));

        // Dropping the handle cancels the timer once the response is in.
        let _timer = {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let signal = controller.signal();
        let builder = intercept_request(
            builder_for(method, url)
                .header("Content-Type", DEFAULT_CONTENT_TYPE)
                .abort_signal(Some(&signal)),
        );

        let sent = match body {
            Some(text) => match builder.body(text) {
                Ok(request) => request.send().await,
                Err(e) => return Err(ApiError::Serialize(e.to_string())),
            },
            None => builder.send().await,
        };

        let response =
            sent.map_err(|e| ApiError::from_transport(e, timed_out.get(), self.timeout_ms))?;
        unwrap_body(response, &timed_out, self.timeout_ms).await
    }
}

fn builder_for(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => gloo_net::http::Request::get(url),
        HttpMethod::Post => gloo_net::http::Request::post(url),
        HttpMethod::Put => gloo_net::http::Request::put(url),
    }
}

/// Outgoing requests pass through unchanged. Auth headers go here once the
/// backend issues tokens.
fn intercept_request(builder: RequestBuilder) -> RequestBuilder {
    builder
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

async fn unwrap_body<T: DeserializeOwned>(
    response: Response,
    timed_out: &Cell<bool>,
    timeout_ms: u32,
) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let body = if body.trim().is_empty() {
            response.status_text()
        } else {
            extract_detail(&body)
        };
        return Err(ApiError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::from_body_read(e, timed_out.get(), timeout_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_urls() {
        let client = HttpClient::new("http://127.0.0.1:8000/api/", 500);
        assert_eq!(client.url("/rules/"), "http://127.0.0.1:8000/api/rules/");
        assert_eq!(client.url("/rules/3/publish"), "http://127.0.0.1:8000/api/rules/3/publish");
        assert_eq!(client.timeout_ms(), 500);
    }

    #[test]
    fn test_default_client_uses_config() {
        let client = HttpClient::default();
        assert_eq!(client.base_url(), config::api_base());
        assert_eq!(client.timeout_ms(), REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_encode_body() {
        assert_eq!(encode_body(&json!({"status": "offline"})).unwrap(), r#"{"status":"offline"}"#);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }
}

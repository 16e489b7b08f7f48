/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/

//! Request layer for the Educa API
//!
//! Every network call goes through [`HttpClient::request`]. It owns the base
//! URL and default headers, reads every response as text before trying JSON,
//! and turns the backend's inconsistent failure signalling (401/403 statuses on
//! one side, `{"error": "..."}` bodies with status 200 on the other) into one
//! [`ResponseOutcome`].

use crate::application::config::Config;
use crate::constants::{
    AUTH_ERROR_KEYWORDS, DEFAULT_CONTENT_TYPE, SESSION_EXPIRED_MESSAGE, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::{RequestBody, RequestOptions};
use crate::model::responses::ApiPayload;
use crate::session::handler::{SessionExpiredHandler, SessionExpiryHook};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Classification of a response, computed once per call
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Usable payload
    Payload(ApiPayload),
    /// The session is no longer valid
    SessionExpired(String),
    /// The backend refused the operation
    Domain(String),
    /// Non-2xx response without an `error` field
    Http {
        /// Response status
        status: StatusCode,
        /// Message for the user
        message: String,
    },
}

impl ResponseOutcome {
    /// Whether this outcome must trigger the session expiry handler
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ResponseOutcome::SessionExpired(_))
    }

    /// Converts into the value returned to callers
    pub fn into_result(self) -> Result<ApiPayload, AppError> {
        match self {
            ResponseOutcome::Payload(payload) => Ok(payload),
            ResponseOutcome::SessionExpired(msg) => Err(AppError::SessionExpired(msg)),
            ResponseOutcome::Domain(msg) => Err(AppError::Domain(msg)),
            ResponseOutcome::Http { status, message } => Err(AppError::Http { status, message }),
        }
    }
}

/// Whether an `error` message means the user is no longer authenticated
#[must_use]
pub fn is_auth_error_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    AUTH_ERROR_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

fn non_empty_str<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Truthiness of a JSON value as the backend's consumers have always read it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classifies a response from its status and raw body
///
/// Rules, in order:
/// 1. 401 or 403: session expired, whatever the body says.
/// 2. JSON body with a non-empty string `error`: session expired when the text
///    mentions the session or authentication, a domain error otherwise.
/// 3. JSON body with a truthy `error` that is not a string: the raw text on a
///    failure status, the payload otherwise.
/// 4. Failure status: `message` from the body, else `HTTP <status>`.
/// 5. Body that is not JSON: the raw text on a failure status (or the parser's
///    message if there is no text), the text as payload otherwise.
///
/// An empty body is read as JSON `null`.
#[must_use]
pub fn classify_response(status: StatusCode, text: &str) -> ResponseOutcome {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ResponseOutcome::SessionExpired(SESSION_EXPIRED_MESSAGE.to_string());
    }

    let parsed = if text.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(text)
    };

    let data = match parsed {
        Ok(data) => data,
        Err(parse_error) => {
            if status.is_success() {
                return ResponseOutcome::Payload(ApiPayload::Text(text.to_string()));
            }
            let message = if text.is_empty() {
                parse_error.to_string()
            } else {
                text.to_string()
            };
            return ResponseOutcome::Http { status, message };
        }
    };

    match data.get("error") {
        Some(Value::String(msg)) if !msg.is_empty() => {
            return if is_auth_error_message(msg) {
                ResponseOutcome::SessionExpired(msg.clone())
            } else {
                ResponseOutcome::Domain(msg.clone())
            };
        }
        Some(other) if is_truthy(other) => {
            return if status.is_success() {
                ResponseOutcome::Payload(ApiPayload::Json(data))
            } else {
                ResponseOutcome::Http {
                    status,
                    message: text.to_string(),
                }
            };
        }
        _ => {}
    }

    if !status.is_success() {
        // a usable `error` was handled above, only `message` is left
        let message = non_empty_str(&data, "message")
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        return ResponseOutcome::Http { status, message };
    }

    ResponseOutcome::Payload(ApiPayload::Json(data))
}

/// Joins `path` to `base_url`; absolute URLs are used as-is
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Request client for the Educa API
///
/// Holds no state besides the connection pool, the base URL and the session
/// expiry slot. Every call is a single attempt: no retries, no cancellation.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
    expiry_hook: SessionExpiryHook,
}

impl HttpClient {
    /// Creates a client from configuration
    ///
    /// # Arguments
    /// * `config` - Configuration with the base URL and optional timeout
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url: config.rest_api.base_url.clone(),
            expiry_hook: SessionExpiryHook::new(),
        })
    }

    /// Creates a client for `base_url` with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.to_string(),
            expiry_hook: SessionExpiryHook::new(),
        })
    }

    /// Registers the session expiry handler at construction time
    #[must_use]
    pub fn with_session_expired_handler(self, handler: Arc<dyn SessionExpiredHandler>) -> Self {
        self.expiry_hook.register(handler);
        self
    }

    /// Replaces the session expiry handler; the last registration wins
    pub fn set_session_expired_handler(&self, handler: Arc<dyn SessionExpiredHandler>) {
        self.expiry_hook.register(handler);
    }

    /// Removes the session expiry handler
    pub fn clear_session_expired_handler(&self) {
        self.expiry_hook.clear();
    }

    /// Base URL every relative path is joined to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and classifies the response
    ///
    /// # Arguments
    /// * `path` - Path relative to the base URL, query string included
    /// * `options` - Method, extra headers and body
    ///
    /// # Returns
    /// * `Ok(ApiPayload)` - Parsed JSON, or the raw text when it is not JSON
    /// * `Err(AppError)` - Session expired, domain, HTTP or network failure
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiPayload, AppError> {
        let url = build_url(&self.base_url, path);
        let RequestOptions {
            method,
            headers,
            body,
        } = options;

        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method.clone(), &url);

        // caller headers replace the default on the same name
        let mut header_map = HeaderMap::new();
        header_map.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );
        for (name, value) in &headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))?;
            header_map.insert(name, value);
        }
        request = request.headers(header_map);

        if let Some(body) = &body {
            request = request.body(body.encode()?);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;
        let outcome = classify_response(status, &text);

        match &outcome {
            ResponseOutcome::SessionExpired(msg) => {
                warn!("Session expired on {} {}: {}", method, url, msg);
                self.expiry_hook.fire();
            }
            ResponseOutcome::Http { status, message } => {
                error!("Request failed with status {}: {}", status, message);
            }
            ResponseOutcome::Domain(msg) => {
                debug!("Backend rejected {} {}: {}", method, url, msg);
            }
            ResponseOutcome::Payload(_) => {}
        }

        outcome.into_result()
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<ApiPayload, AppError> {
        self.request(path, RequestOptions::new()).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiPayload, AppError> {
        self.request(path, RequestOptions::post(RequestBody::json(body)?))
            .await
    }

    /// Makes a GET request and deserializes the payload
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.get(path).await?.into_typed()
    }

    /// Makes a POST request and deserializes the payload
    pub async fn post_as<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.post(path, body).await?.into_typed()
    }

    /// Makes a request with an arbitrary method and optional JSON body
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiPayload, AppError> {
        let mut options = RequestOptions::new().with_method(method);
        if let Some(body) = body {
            options = options.with_body(RequestBody::json(body)?);
        }
        self.request(path, options).await
    }
}

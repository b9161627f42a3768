//! HTTP transport to the REST API
//!
//! Every request carries the session cookie. Mutating requests also send the
//! CSRF token read from the cookie jar. Error statuses are mapped to
//! [`ApiError`] by [`classify_response`]; a 401 additionally triggers the
//! session-expired hook the client was built with.

use crate::shared::api_utils::ApiConfig;
use contracts::shared::validation::{FieldErrors, GENERAL};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Sessão expirada. Faça login novamente.")]
    SessionExpired,

    /// 400 with field-keyed messages
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("Registro não encontrado")]
    NotFound,

    #[error("Erro {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),

    #[error("Resposta inesperada do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a toast or an error banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(errors) if errors.is_empty() => "Dados inválidos".to_string(),
            ApiError::Validation(errors) => errors.summary(),
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Field messages to show next to form inputs
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// Map a response status and body to success or an [`ApiError`]
pub fn classify_response(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        400 => {
            let errors = FieldErrors::from_response_body(body);
            if errors.is_empty() {
                Err(ApiError::Validation(FieldErrors::general("Requisição inválida")))
            } else {
                Err(ApiError::Validation(errors))
            }
        }
        401 => Err(ApiError::SessionExpired),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Http {
            status,
            message: server_message(body).unwrap_or_else(|| default_message(status).to_string()),
        }),
    }
}

/// Message from a JSON error body; HTML error pages are ignored
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let errors = FieldErrors::from_json(&value);
    if let Some(general) = errors.first(GENERAL) {
        return Some(general.to_string());
    }
    (!errors.is_empty()).then(|| errors.summary())
}

fn default_message(status: u16) -> &'static str {
    match status {
        403 => "Sem permissão para esta operação",
        500..=599 => "Erro interno do servidor",
        _ => "Falha na requisição",
    }
}

/// Append a serde_qs-encoded query to a URL; empty queries add nothing
pub fn with_query<Q: Serialize + ?Sized>(url: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(&query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(url.to_string())
    } else {
        Ok(format!("{}?{}", url, qs))
    }
}

/// Value of a cookie in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, cookie_name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
    }

    fn is_mutating(self) -> bool {
        self != Verb::Get
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        })
    }
}

/// Client for the REST API
///
/// Cheap to clone; clones share the configuration and the session hook.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ApiConfig>,
    on_session_expired: Rc<dyn Fn()>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// `on_session_expired` runs before a 401 is returned to the caller
    pub fn new(config: ApiConfig, on_session_expired: impl Fn() + 'static) -> Self {
        Self {
            config: Rc::new(config),
            on_session_expired: Rc::new(on_session_expired),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        let body = self.execute(Verb::Get, &url, None).await?;
        decode(&body)
    }

    pub async fn get_with<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = with_query(&self.config.url(path), query)?;
        let body = self.execute(Verb::Get, &url, None).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        let body = self.execute(Verb::Post, &url, Some(encode(payload)?)).await?;
        decode(&body)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        let body = self.execute(Verb::Put, &url, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// 204 responses have no body, so nothing is decoded
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.url(path);
        self.execute(Verb::Delete, &url, None).await.map(|_| ())
    }

    async fn execute(&self, verb: Verb, url: &str, payload: Option<String>) -> Result<String, ApiError> {
        log::debug!("{} {}", verb, url);

        let mut builder = verb
            .builder(url)
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");
        if verb.is_mutating() {
            if let Some(token) = csrf_token(&self.config.csrf_cookie) {
                builder = builder.header(&self.config.csrf_header, &token);
            }
        }

        let request = match payload {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", verb, url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Err(err) = classify_response(status, &body) {
            if err.is_session_expired() {
                log::warn!("{} {}: session expired", verb, url);
                (self.on_session_expired)();
            } else {
                log::warn!("{} {} -> {}: {}", verb, url, status, err);
            }
            return Err(err);
        }
        Ok(body)
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

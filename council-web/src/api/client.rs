use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use super::error::AuthError;
use crate::vars::API_AUTH_PATH;

pub type AuthFuture<T> = Pin<Box<dyn Future<Output = Result<T, AuthError>>>>;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub auth_required: bool,
}

/// Boundary to the backend credential store. The login form only ever
/// sees success or failure; it does not inspect the failure cause.
pub trait AuthClient {
    fn login(&self, password: &str) -> AuthFuture<()>;
    fn logout(&self) -> AuthFuture<()>;
    fn fetch_status(&self) -> AuthFuture<AuthStatus>;
}

/// Fetch-backed client for the backend auth endpoints. The session
/// cookie is set and read server-side; requests only carry credentials.
#[derive(Clone)]
pub struct HttpAuthClient {
    base_path: String,
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpAuthClient {
    pub fn new() -> Self {
        Self {
            base_path: API_AUTH_PATH.to_string(),
        }
    }
}

impl AuthClient for HttpAuthClient {
    fn login(&self, password: &str) -> AuthFuture<()> {
        let url = format!("{}/login", self.base_path);
        let request = LoginRequest {
            password: password.to_string(),
        };
        Box::pin(async move {
            let body = serde_json::to_string(&request)?;
            let response = send_request(&url, "POST", Some(&body)).await?;
            expect_success(&response)
        })
    }

    fn logout(&self) -> AuthFuture<()> {
        let url = format!("{}/logout", self.base_path);
        Box::pin(async move {
            let response = send_request(&url, "POST", None).await?;
            expect_success(&response)
        })
    }

    fn fetch_status(&self) -> AuthFuture<AuthStatus> {
        let url = format!("{}/status", self.base_path);
        Box::pin(async move {
            let response = send_request(&url, "GET", None).await?;
            expect_success(&response)?;
            let body = response_text(&response).await?;
            let status: AuthStatus = serde_json::from_str(&body)?;
            Ok(status)
        })
    }
}

async fn send_request(
    url: &str,
    method: &str,
    json_body: Option<&str>,
) -> Result<Response, AuthError> {
    let window = web_sys::window().ok_or_else(|| {
        AuthError::Request("window is not available".to_string())
    })?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(AuthError::from_js)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(AuthError::from_js)?;
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(AuthError::from_js)?;
    response.dyn_into::<Response>().map_err(|_| {
        AuthError::Request("unexpected fetch response type".to_string())
    })
}

fn expect_success(response: &Response) -> Result<(), AuthError> {
    if response.ok() {
        Ok(())
    } else if response.status() == 401 {
        Err(AuthError::Unauthorized)
    } else {
        Err(AuthError::Server(response.status()))
    }
}

async fn response_text(response: &Response) -> Result<String, AuthError> {
    let text = JsFuture::from(response.text().map_err(AuthError::from_js)?)
        .await
        .map_err(AuthError::from_js)?;
    text.as_string().ok_or_else(|| {
        AuthError::Request("response body is not text".to_string())
    })
}

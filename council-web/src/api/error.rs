use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum AuthError {
    Request(String),
    Unauthorized,
    Server(u16),
}

impl AuthError {
    pub fn from_js(value: JsValue) -> Self {
        let message =
            value.as_string().unwrap_or_else(|| format!("{:?}", value));
        AuthError::Request(message)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Request(msg) => write!(f, "Request Error: {}", msg),
            AuthError::Unauthorized => write!(f, "Unauthorized"),
            AuthError::Server(status) => {
                write!(f, "Server Error: status {}", status)
            }
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Request(err.to_string())
    }
}

mod client;
mod error;

pub use client::{
    AuthClient, AuthFuture, AuthStatus, HttpAuthClient, LoginRequest,
};
pub use error::AuthError;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::{info, warn};
use validator::Validate;

use crate::domain::auth::dto::login_request::LoginRequest;
use crate::domain::common::domain_error::DomainError;

/// Placeholder login gate: a single configured credential pair, no sessions.
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub async fn login(&self, req: LoginRequest) -> Result<Value> {
        req.validate()?;

        if req.username != self.username || req.password != self.password {
            warn!(username = %req.username, "Rejected login attempt");
            return Err(DomainError::InvalidCredentials.into());
        }

        info!(username = %req.username, "Login accepted");
        Ok(json!({
            "message": "Login successful",
            "username": req.username,
        }))
    }
}

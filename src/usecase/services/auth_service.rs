use chrono::Local;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::auth::{LoginRequest, RegisterRequest, RegisteredUser, Session};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("All fields are required.")]
    MissingFields,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("Age must be a whole number.")]
    InvalidAge,
}

impl AuthError {
    /// HTTP-style status the mock endpoints answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::MissingFields | AuthError::PasswordTooShort | AuthError::InvalidAge => 400,
        }
    }
}

/// Mock authentication backed by a single demo account.
#[derive(Debug, Clone)]
pub struct AuthService {
    demo_email: String,
    demo_password: String,
}

impl AuthService {
    pub fn new(demo_email: impl Into<String>, demo_password: impl Into<String>) -> Self {
        Self {
            demo_email: demo_email.into(),
            demo_password: demo_password.into(),
        }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        if request.email != self.demo_email || request.password != self.demo_password {
            warn!(email = %request.email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        info!(email = %request.email, "login accepted");
        Ok(Session {
            email: request.email.clone(),
            signed_in_at: Local::now(),
        })
    }

    /// Validates a registration form. Nothing is stored.
    pub fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, AuthError> {
        let fields = [&request.email, &request.password, &request.name, &request.age];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(AuthError::MissingFields);
        }
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        let age = request
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| AuthError::InvalidAge)?;

        info!(email = %request.email, "registration accepted");
        Ok(RegisteredUser {
            email: request.email.clone(),
            name: request.name.clone(),
            age,
        })
    }
}

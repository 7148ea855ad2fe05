use crate::usecase::services::auth_service::AuthError;

pub mod categories;
pub mod dashboard;
pub mod login;
pub mod products;
pub mod register;

/// Form error line for a rejected login or registration, e.g. `... (401)`.
pub fn auth_error_text(err: &AuthError) -> String {
    format!("{err} ({})", err.status_code())
}

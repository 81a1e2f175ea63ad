use crate::api::{AdminLoginRequest, ApiError};

pub fn validate_credentials(email: &str, password: &str) -> Result<AdminLoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter your email"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(AdminLoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

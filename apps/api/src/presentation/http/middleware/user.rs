use crate::infrastructure::security::tokens::TokenService;
use crate::presentation::http::errors::AppError;
use axum::http::{HeaderMap, header};

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Username of the authenticated caller, or 401.
pub fn require_caller(headers: &HeaderMap, tokens: &TokenService) -> Result<String, AppError> {
    let token = extract_bearer_token(headers).ok_or(AppError::Unauthorized)?;
    let claims = tokens.verify(&token)?;
    Ok(claims.sub)
}

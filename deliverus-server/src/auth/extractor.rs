//! `CurrentUser` as a handler argument
//!
//! Handlers that mutate a restaurant take `user: CurrentUser`; the owner
//! check then compares `user.id` with the restaurant's `user_id`.

use axum::extract::FromRequestParts;
use http::{header::AUTHORIZATION, request::Parts};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            security_log!("WARN", "auth_missing", path = parts.uri.path());
            return Err(AppError::unauthorized());
        };
        let token = header
            .to_str()
            .ok()
            .and_then(JwtService::extract_from_header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

        let claims = state.get_jwt_service().validate_token(token).map_err(|e| {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                path = parts.uri.path()
            );
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            }
        })?;

        CurrentUser::try_from(claims)
            .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))
    }
}

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, DecodingKey};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::validation_for;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Generic JWT claims that can be validated against any claims type
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims<C> {
    pub claims: C,
}

impl<C> JwtClaims<C>
where
    C: for<'de> Deserialize<'de>,
{
    /// Verify and decode a JWT token into the specified claims type
    pub fn verify(token: &str, security: &SecurityConfig) -> Result<Self, AppError> {
        decode::<C>(
            token,
            &DecodingKey::from_secret(&security.jwt_secret),
            &validation_for(security),
        )
        .map(|data| JwtClaims {
            claims: data.claims,
        })
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                security::auth_rejected("expired");
                AppError::unauthorized_expired_jwt()
            }
            ErrorKind::InvalidSignature => {
                security::auth_rejected("invalid_signature");
                AppError::unauthorized_invalid_jwt()
            }
            _ => {
                security::auth_rejected("invalid_token");
                AppError::unauthorized_invalid_jwt()
            }
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_value = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let mut parts = auth_value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Ok(token.to_string())
        }
        _ => {
            security::auth_rejected("malformed_header");
            Err(AppError::unauthorized_missing_bearer())
        }
    }
}

impl<C> FromRequest for JwtClaims<C>
where
    C: for<'de> Deserialize<'de> + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            JwtClaims::verify(&token, &app_state.security)
        })
    }
}

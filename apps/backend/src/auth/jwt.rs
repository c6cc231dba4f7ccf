use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header, Validation};

use crate::auth::claims::AuthClaims;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::state::security_config::SecurityConfig;

pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Validation rules shared by every verifier: pinned algorithm, `exp`
/// required, `aud`/`iss` only when configured.
pub fn validation_for(security: &SecurityConfig) -> Validation {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    match &security.audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    if let Some(iss) = &security.issuer {
        validation.set_issuer(&[iss]);
    }
    validation
}

/// Mint a token with a 15-minute TTL. Dev and test tooling only; production
/// tokens come from the identity provider.
pub fn mint_access_token(
    sub: &str,
    permissions: &[&str],
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = AuthClaims {
        sub: sub.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
        aud: security.audience.clone(),
        iss: security.issuer.clone(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a bearer token and return its claims.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<AuthClaims, AppError> {
    JwtClaims::<AuthClaims>::verify(token, security).map(|jwt| jwt.claims)
}

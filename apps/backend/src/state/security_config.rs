use std::env;

use jsonwebtoken::Algorithm;

use crate::config::db::must_var;
use crate::error::AppError;

/// JWT verification settings for the permission-protected drinks routes
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret for HS256 signing and verification
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Expected `aud`; not checked when `None`
    pub audience: Option<String>,
    /// Expected `iss`; not checked when `None`
    pub issuer: Option<String>,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            audience: None,
            issuer: None,
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// `BACKEND_JWT_SECRET` is required; `AUTH_AUDIENCE` and `AUTH_ISSUER` are optional.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = must_var("BACKEND_JWT_SECRET")?;
        if secret.is_empty() {
            return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
        }
        let mut config = Self::new(secret.into_bytes());
        config.audience = env::var("AUTH_AUDIENCE").ok().filter(|s| !s.is_empty());
        config.issuer = env::var("AUTH_ISSUER").ok().filter(|s| !s.is_empty());
        Ok(config)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

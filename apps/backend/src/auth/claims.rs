//! Claims carried by bearer tokens on the drinks routes.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::logging::security;

/// Permission strings checked by the drinks routes.
pub mod permissions {
    pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
    pub const POST_DRINKS: &str = "post:drinks";
    pub const PATCH_DRINKS: &str = "patch:drinks";
    pub const DELETE_DRINKS: &str = "delete:drinks";
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    /// Subject (caller identity as issued by the identity provider)
    pub sub: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl AuthClaims {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// `403 FORBIDDEN_MISSING_PERMISSION` unless the token grants `permission`.
    pub fn require_permission(&self, permission: &str) -> Result<(), AppError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            security::permission_denied(&self.sub, permission);
            Err(AppError::forbidden_missing_permission(permission))
        }
    }
}

use tracing::warn;

use crate::trace_ctx;

/// Log a rejected bearer token. `reason` must not contain the token itself.
pub fn auth_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        reason,
        "Authentication failure"
    );
}

/// Log a valid token that lacks the permission a route requires.
pub fn permission_denied(sub: &str, permission: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_PERMISSION_DENIED",
        %trace_id,
        sub,
        permission,
        "Missing permission"
    );
}

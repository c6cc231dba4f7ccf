use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used to scrub secrets from log lines.
///
/// Every pattern is a vetted literal; the `unwrap` at each construction
/// site cannot fire at runtime.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Credentials embedded in a connection URL: `scheme://user:password@`
    pub fn url_credentials() -> &'static Regex {
        static URL_CREDENTIALS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?P<scheme>[a-z][a-z0-9+.-]*://)(?P<user>[^:/@\s]+):[^@\s]+@").unwrap()
        });
        &URL_CREDENTIALS_REGEX
    }

    /// `Bearer <token>` as it appears in an Authorization header
    pub fn bearer() -> &'static Regex {
        static BEARER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?i)\bbearer\s+\S+").unwrap()
        });
        &BEARER_REGEX
    }

    /// Three dot-separated base64url segments, i.e. a compact JWT
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
        });
        &JWT_REGEX
    }
}

/// Redacts secrets from a string.
///
/// - connection URLs keep scheme and user, the password becomes `***`
/// - `Bearer` values and bare JWTs become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let urls = PiiRegexRegistry::url_credentials().replace_all(input, "${scheme}${user}:***@");
    let bearer = PiiRegexRegistry::bearer().replace_all(&urls, "Bearer [REDACTED_TOKEN]");
    PiiRegexRegistry::jwt()
        .replace_all(&bearer, "[REDACTED_TOKEN]")
        .to_string()
}

/// Formats the wrapped string through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

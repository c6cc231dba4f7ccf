//! Error codes for the trivia-cafe API.
//!
//! All error codes used throughout the application live here. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// Token is valid but lacks the permission the route requires
    ForbiddenMissingPermission,

    // Request Validation
    /// General validation error (well-formed JSON, unacceptable values)
    ValidationError,
    /// Request body or query could not be parsed
    BadRequest,
    /// Page parameter is not a positive integer
    InvalidPage,

    // Resource Not Found
    QuestionNotFound,
    CategoryNotFound,
    DrinkNotFound,
    VenueNotFound,
    ArtistNotFound,
    /// Requested page lies past the end of the question list
    PageNotFound,
    /// General not found error (including unknown routes)
    NotFound,
    MethodNotAllowed,

    // Business Logic Conflicts
    /// Another drink already uses this title
    DrinkTitleTaken,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenMissingPermission => "FORBIDDEN_MISSING_PERMISSION",

            // Request Validation
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidPage => "INVALID_PAGE",

            // Resource Not Found
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::DrinkNotFound => "DRINK_NOT_FOUND",
            Self::VenueNotFound => "VENUE_NOT_FOUND",
            Self::ArtistNotFound => "ARTIST_NOT_FOUND",
            Self::PageNotFound => "PAGE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            // Business Logic Conflicts
            Self::DrinkTitleTaken => "DRINK_TITLE_TAKEN",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

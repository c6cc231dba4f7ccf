use std::env;

use crate::error::AppError;

pub const DEFAULT_QUESTIONS_PER_PAGE: u64 = 10;

/// Knobs for the public JSON API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Page size for `GET /api/questions`
    pub questions_per_page: u64,
}

impl ApiConfig {
    pub fn new(questions_per_page: u64) -> Self {
        Self { questions_per_page }
    }

    /// Read `QUESTIONS_PER_PAGE`; unset means the default, zero or junk is an error.
    pub fn from_env() -> Result<Self, AppError> {
        let questions_per_page = match env::var("QUESTIONS_PER_PAGE") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "QUESTIONS_PER_PAGE must be a positive integer, got '{raw}'"
                    )))
                }
            },
            Err(_) => DEFAULT_QUESTIONS_PER_PAGE,
        };
        Ok(Self { questions_per_page })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PER_PAGE)
    }
}

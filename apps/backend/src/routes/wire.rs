//! Lenient scalar shapes accepted from the browser clients, which send ids
//! taken from object keys as strings.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(n) => Some(*n),
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Search body shared by venues and artists.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTerm {
    #[serde(alias = "searchTerm", default)]
    pub search_term: Option<String>,
}

//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps it
//! to `DomainError`.

use sea_orm::sea_query::LikeExpr;

pub mod artists_sea;
pub mod categories_sea;
pub mod drinks_sea;
pub mod questions_sea;
pub mod shows_sea;
pub mod venues_sea;

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Case-insensitive "contains" pattern; match it against `LOWER(column)`.
pub(crate) fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(&term.to_lowercase()))).escape('\\')
}

//! Repository functions: adapter calls mapped to domain types and `DomainError`.

pub mod artists;
pub mod categories;
pub mod drinks;
pub mod questions;
pub mod shows;
pub mod venues;

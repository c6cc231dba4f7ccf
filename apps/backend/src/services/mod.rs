pub mod artists;
pub mod drinks;
pub mod questions;
pub mod quiz;
pub mod shows;
pub mod venues;

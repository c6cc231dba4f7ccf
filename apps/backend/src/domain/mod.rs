//! Domain layer: quiz selection, question rules, drink recipes and show
//! booking.
//!
//! Nothing here touches HTTP or the database.

pub mod booking;
pub mod drink;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod recipe;
pub mod show;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_quiz;

// Re-exports for ergonomics
pub use booking::{
    Artist, ArtistDraft, ArtistPatch, BookingSummary, Profile, Venue, VenueArea, VenueDraft,
    VenuePatch,
};
pub use drink::{Drink, DrinkLong, DrinkShort};
pub use question::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use quiz::{select_next, QuizState, RandomSource, RngSource};
pub use recipe::{Ingredient, Recipe, ShortIngredient};
pub use show::{BookingDetail, Show, ShowSplit};

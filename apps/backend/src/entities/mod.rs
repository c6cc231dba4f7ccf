pub mod artists;
pub mod categories;
pub mod drinks;
pub mod questions;
pub mod show_artists;
pub mod show_venues;
pub mod shows;
pub mod venues;

pub use artists::Entity as Artists;
pub use artists::Model as Artist;
pub use categories::Entity as Categories;
pub use categories::Model as Category;
pub use drinks::Entity as Drinks;
pub use drinks::Model as Drink;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
pub use show_artists::Entity as ShowArtists;
pub use show_venues::Entity as ShowVenues;
pub use shows::Entity as Shows;
pub use shows::Model as Show;
pub use venues::Entity as Venues;
pub use venues::Model as Venue;

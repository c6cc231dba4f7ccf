//! DTOs for the artists adapter. `genres` is the encoded column value.

/// Every writable column of an artist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistWrite {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
}

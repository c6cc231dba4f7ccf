//! DTOs for the venues adapter. `genres` is the encoded column value.

/// Every writable column of a venue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueWrite {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
}

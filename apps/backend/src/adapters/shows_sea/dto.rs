//! DTOs for the shows adapter.

use sea_orm::FromQueryResult;
use time::OffsetDateTime;

/// A show plus the artist and venue it links.
#[derive(Debug, Clone)]
pub struct ShowCreate {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: OffsetDateTime,
}

impl ShowCreate {
    pub fn new(artist_id: i64, venue_id: i64, start_time: OffsetDateTime) -> Self {
        Self {
            artist_id,
            venue_id,
            start_time,
        }
    }
}

/// Row filter for show listings; unset fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowFilter {
    pub venue_id: Option<i64>,
    pub artist_id: Option<i64>,
    /// Only shows starting at or after this instant
    pub starting_from: Option<OffsetDateTime>,
}

impl ShowFilter {
    pub fn for_venue(venue_id: i64) -> Self {
        Self {
            venue_id: Some(venue_id),
            ..Self::default()
        }
    }

    pub fn for_artist(artist_id: i64) -> Self {
        Self {
            artist_id: Some(artist_id),
            ..Self::default()
        }
    }

    pub fn starting_from(mut self, at: OffsetDateTime) -> Self {
        self.starting_from = Some(at);
        self
    }
}

/// One show joined with its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ShowRow {
    pub show_id: i64,
    pub start_time: OffsetDateTime,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

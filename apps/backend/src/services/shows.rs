//! Show listing and booking.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::shows_sea::ShowFilter;
use crate::domain::show::Show;
use crate::errors::domain::DomainError;
use crate::repos::{artists, shows, venues};

pub struct ShowService;

impl ShowService {
    pub fn new() -> Self {
        Self
    }

    /// Every show, ordered by start time.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Show>, DomainError> {
        shows::list(conn, ShowFilter::default()).await
    }

    /// Book an artist at a venue. Unknown ids are a validation failure
    /// because they come from the request body.
    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        artist_id: i64,
        venue_id: i64,
        start_time: OffsetDateTime,
    ) -> Result<Show, DomainError> {
        let artist = artists::find_by_id(conn, artist_id)
            .await?
            .ok_or_else(|| DomainError::validation(format!("artist {artist_id} does not exist")))?;
        let venue = venues::find_by_id(conn, venue_id)
            .await?
            .ok_or_else(|| DomainError::validation(format!("venue {venue_id} does not exist")))?;

        let show = shows::create(conn, &venue, &artist, start_time).await?;
        info!(show_id = show.show_id, artist_id, venue_id, "show_created");
        Ok(show)
    }
}

impl Default for ShowService {
    fn default() -> Self {
        Self::new()
    }
}

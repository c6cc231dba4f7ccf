//! Show repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::shows_sea as shows_adapter;
use crate::adapters::shows_sea::{ShowFilter, ShowRow};
use crate::domain::booking::{Artist, Venue};
use crate::domain::show::Show;
use crate::errors::domain::DomainError;

impl From<ShowRow> for Show {
    fn from(row: ShowRow) -> Self {
        Self {
            show_id: row.show_id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}

/// Shows matching `filter`, ordered by start time then id.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: ShowFilter,
) -> Result<Vec<Show>, DomainError> {
    let rows = shows_adapter::list_rows(conn, filter).await?;
    Ok(rows.into_iter().map(Show::from).collect())
}

/// Book `artist` at `venue`.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue: &Venue,
    artist: &Artist,
    start_time: OffsetDateTime,
) -> Result<Show, DomainError> {
    let dto = shows_adapter::ShowCreate::new(artist.id, venue.id, start_time);
    let show = shows_adapter::create(conn, dto).await?;
    Ok(Show {
        show_id: show.id,
        venue_id: venue.id,
        venue_name: venue.profile.name.clone(),
        venue_image_link: venue.profile.image_link.clone(),
        artist_id: artist.id,
        artist_name: artist.profile.name.clone(),
        artist_image_link: artist.profile.image_link.clone(),
        start_time: show.start_time,
    })
}

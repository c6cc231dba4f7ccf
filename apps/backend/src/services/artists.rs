//! Artist booking service.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::shows_sea::ShowFilter;
use crate::domain::booking::{Artist, ArtistDraft, ArtistPatch, BookingSummary};
use crate::domain::show::{split_shows, upcoming_counts, BookingDetail};
use crate::errors::domain::DomainError;
use crate::repos::{artists, shows};

/// Entry of the artist list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistName {
    pub id: i64,
    pub name: String,
}

pub struct ArtistService;

impl ArtistService {
    pub fn new() -> Self {
        Self
    }

    /// Ordered by name.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ArtistName>, DomainError> {
        let artists = artists::list_all(conn).await?;
        Ok(artists
            .into_iter()
            .map(|a| ArtistName {
                id: a.id,
                name: a.profile.name,
            })
            .collect())
    }

    pub async fn detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        now: OffsetDateTime,
    ) -> Result<BookingDetail<Artist>, DomainError> {
        let artist = artists::require(conn, id).await?;
        let booked = shows::list(conn, ShowFilter::for_artist(id)).await?;
        Ok(BookingDetail::new(artist, split_shows(booked, now)))
    }

    /// A blank term matches every artist.
    pub async fn search<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &str,
        now: OffsetDateTime,
    ) -> Result<Vec<BookingSummary>, DomainError> {
        let found = artists::search(conn, term.trim()).await?;
        let upcoming = shows::list(conn, ShowFilter::default().starting_from(now)).await?;
        let counts = upcoming_counts(&upcoming, now, |s| s.artist_id);
        Ok(found
            .into_iter()
            .map(|a| BookingSummary {
                num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.profile.name,
            })
            .collect())
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        patch: ArtistPatch,
    ) -> Result<Artist, DomainError> {
        let artist = artists::create(conn, ArtistDraft::create(patch)?).await?;
        info!(artist_id = artist.id, "artist_created");
        Ok(artist)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        patch: ArtistPatch,
    ) -> Result<Artist, DomainError> {
        let draft = artists::require(conn, id).await?.patched(patch)?;
        let artist = artists::update(conn, id, draft).await?;
        info!(artist_id = artist.id, "artist_updated");
        Ok(artist)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        let shows_removed = artists::delete(conn, id).await?;
        info!(artist_id = id, shows_removed, "artist_deleted");
        Ok(())
    }
}

impl Default for ArtistService {
    fn default() -> Self {
        Self::new()
    }
}

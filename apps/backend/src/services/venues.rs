//! Venue booking service.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::shows_sea::ShowFilter;
use crate::domain::booking::{group_areas, BookingSummary, Venue, VenueArea, VenueDraft, VenuePatch};
use crate::domain::show::{split_shows, upcoming_counts, BookingDetail};
use crate::errors::domain::DomainError;
use crate::repos::{shows, venues};

pub struct VenueService;

impl VenueService {
    pub fn new() -> Self {
        Self
    }

    /// Venues grouped into `(city, state)` areas with their upcoming show counts.
    pub async fn list_areas<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        now: OffsetDateTime,
    ) -> Result<Vec<VenueArea>, DomainError> {
        let venues = venues::list_all(conn).await?;
        let upcoming = shows::list(conn, ShowFilter::default().starting_from(now)).await?;
        Ok(group_areas(venues, &upcoming_counts(&upcoming, now, |s| s.venue_id)))
    }

    pub async fn detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        now: OffsetDateTime,
    ) -> Result<BookingDetail<Venue>, DomainError> {
        let venue = venues::require(conn, id).await?;
        let booked = shows::list(conn, ShowFilter::for_venue(id)).await?;
        Ok(BookingDetail::new(venue, split_shows(booked, now)))
    }

    /// A blank term matches every venue.
    pub async fn search<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &str,
        now: OffsetDateTime,
    ) -> Result<Vec<BookingSummary>, DomainError> {
        let found = venues::search(conn, term.trim()).await?;
        let upcoming = shows::list(conn, ShowFilter::default().starting_from(now)).await?;
        let counts = upcoming_counts(&upcoming, now, |s| s.venue_id);
        Ok(found
            .into_iter()
            .map(|v| BookingSummary {
                num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.profile.name,
            })
            .collect())
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        patch: VenuePatch,
    ) -> Result<Venue, DomainError> {
        let venue = venues::create(conn, VenueDraft::create(patch)?).await?;
        info!(venue_id = venue.id, "venue_created");
        Ok(venue)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        patch: VenuePatch,
    ) -> Result<Venue, DomainError> {
        let draft = venues::require(conn, id).await?.patched(patch)?;
        let venue = venues::update(conn, id, draft).await?;
        info!(venue_id = venue.id, "venue_updated");
        Ok(venue)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        let shows_removed = venues::delete(conn, id).await?;
        info!(venue_id = id, shows_removed, "venue_deleted");
        Ok(())
    }
}

impl Default for VenueService {
    fn default() -> Self {
        Self::new()
    }
}

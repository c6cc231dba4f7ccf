//! Venue repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::shows_sea as shows_adapter;
use crate::adapters::venues_sea as venues_adapter;
use crate::domain::booking::{decode_genres, encode_genres, Profile, Venue, VenueDraft};
use crate::entities::venues;
use crate::errors::domain::{DomainError, NotFoundKind};

impl From<venues::Model> for Venue {
    fn from(model: venues::Model) -> Self {
        Self {
            id: model.id,
            profile: Profile {
                name: model.name,
                city: model.city,
                state: model.state,
                phone: model.phone,
                genres: decode_genres(&model.genres),
                image_link: model.image_link,
                facebook_link: model.facebook_link,
                website: model.website,
            },
            address: model.address,
            seeking_talent: model.seeking_talent,
        }
    }
}

impl From<VenueDraft> for venues_adapter::VenueWrite {
    fn from(draft: VenueDraft) -> Self {
        let VenueDraft {
            profile,
            address,
            seeking_talent,
        } = draft;
        Self {
            genres: encode_genres(&profile.genres),
            name: profile.name,
            city: profile.city,
            state: profile.state,
            address,
            phone: profile.phone,
            image_link: profile.image_link,
            facebook_link: profile.facebook_link,
            website: profile.website,
            seeking_talent,
        }
    }
}

fn venue_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Venue, format!("Venue {id} not found"))
}

/// Ordered by state, city, then name.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Venue>, DomainError> {
    let rows = venues_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Venue::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Venue>, DomainError> {
    Ok(venues_adapter::find_by_id(conn, id).await?.map(Venue::from))
}

/// Like `find_by_id`, but a missing venue is `NotFoundKind::Venue`.
pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Venue, DomainError> {
    find_by_id(conn, id).await?.ok_or_else(|| venue_not_found(id))
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Venue>, DomainError> {
    let rows = venues_adapter::search(conn, term).await?;
    Ok(rows.into_iter().map(Venue::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: VenueDraft,
) -> Result<Venue, DomainError> {
    Ok(Venue::from(venues_adapter::create(conn, draft.into()).await?))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    draft: VenueDraft,
) -> Result<Venue, DomainError> {
    if find_by_id(conn, id).await?.is_none() {
        return Err(venue_not_found(id));
    }
    Ok(Venue::from(venues_adapter::update(conn, id, draft.into()).await?))
}

/// Remove the venue together with its shows; returns the number of shows removed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    let show_ids = shows_adapter::ids_for_venue(conn, id).await?;
    let removed = shows_adapter::delete_many(conn, &show_ids).await?;
    match venues_adapter::delete_by_id(conn, id).await? {
        0 => Err(venue_not_found(id)),
        _ => Ok(removed),
    }
}

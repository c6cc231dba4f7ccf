//! Artist repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::artists_sea as artists_adapter;
use crate::adapters::shows_sea as shows_adapter;
use crate::domain::booking::{decode_genres, encode_genres, Artist, ArtistDraft, Profile};
use crate::entities::artists;
use crate::errors::domain::{DomainError, NotFoundKind};

impl From<artists::Model> for Artist {
    fn from(model: artists::Model) -> Self {
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
            seeking_venue: model.seeking_venue,
        }
    }
}

impl From<ArtistDraft> for artists_adapter::ArtistWrite {
    fn from(draft: ArtistDraft) -> Self {
        let ArtistDraft {
            profile,
            seeking_venue,
        } = draft;
        Self {
            genres: encode_genres(&profile.genres),
            name: profile.name,
            city: profile.city,
            state: profile.state,
            phone: profile.phone,
            image_link: profile.image_link,
            facebook_link: profile.facebook_link,
            website: profile.website,
            seeking_venue,
        }
    }
}

fn artist_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Artist, format!("Artist {id} not found"))
}

/// Ordered by name.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Artist>, DomainError> {
    let rows = artists_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Artist::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Artist>, DomainError> {
    Ok(artists_adapter::find_by_id(conn, id).await?.map(Artist::from))
}

/// Like `find_by_id`, but a missing artist is `NotFoundKind::Artist`.
pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Artist, DomainError> {
    find_by_id(conn, id).await?.ok_or_else(|| artist_not_found(id))
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Artist>, DomainError> {
    let rows = artists_adapter::search(conn, term).await?;
    Ok(rows.into_iter().map(Artist::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: ArtistDraft,
) -> Result<Artist, DomainError> {
    Ok(Artist::from(artists_adapter::create(conn, draft.into()).await?))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    draft: ArtistDraft,
) -> Result<Artist, DomainError> {
    if find_by_id(conn, id).await?.is_none() {
        return Err(artist_not_found(id));
    }
    Ok(Artist::from(artists_adapter::update(conn, id, draft.into()).await?))
}

/// Remove the artist together with its shows; returns the number of shows removed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    let show_ids = shows_adapter::ids_for_artist(conn, id).await?;
    let removed = shows_adapter::delete_many(conn, &show_ids).await?;
    match artists_adapter::delete_by_id(conn, id).await? {
        0 => Err(artist_not_found(id)),
        _ => Ok(removed),
    }
}

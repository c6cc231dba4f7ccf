//! SeaORM adapter for shows and their artist/venue join rows.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{artists, show_artists, show_venues, shows, venues};

pub mod dto;

pub use dto::{ShowCreate, ShowFilter, ShowRow};

/// Insert the show and both join rows.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ShowCreate,
) -> Result<shows::Model, sea_orm::DbErr> {
    let show = shows::ActiveModel {
        id: NotSet,
        start_time: Set(dto.start_time),
    }
    .insert(conn)
    .await?;

    show_artists::ActiveModel {
        show_id: Set(show.id),
        artist_id: Set(dto.artist_id),
    }
    .insert(conn)
    .await?;

    show_venues::ActiveModel {
        show_id: Set(show.id),
        venue_id: Set(dto.venue_id),
    }
    .insert(conn)
    .await?;

    Ok(show)
}

/// Shows joined with venue and artist names, ordered by start time then id.
pub async fn list_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: ShowFilter,
) -> Result<Vec<ShowRow>, sea_orm::DbErr> {
    let mut query = shows::Entity::find()
        .select_only()
        .column_as(shows::Column::Id, "show_id")
        .column(shows::Column::StartTime)
        .column(show_venues::Column::VenueId)
        .column_as(venues::Column::Name, "venue_name")
        .column_as(venues::Column::ImageLink, "venue_image_link")
        .column(show_artists::Column::ArtistId)
        .column_as(artists::Column::Name, "artist_name")
        .column_as(artists::Column::ImageLink, "artist_image_link")
        .join(JoinType::InnerJoin, shows::Relation::ShowVenue.def())
        .join(JoinType::InnerJoin, show_venues::Relation::Venue.def())
        .join(JoinType::InnerJoin, shows::Relation::ShowArtist.def())
        .join(JoinType::InnerJoin, show_artists::Relation::Artist.def());

    if let Some(venue_id) = filter.venue_id {
        query = query.filter(show_venues::Column::VenueId.eq(venue_id));
    }
    if let Some(artist_id) = filter.artist_id {
        query = query.filter(show_artists::Column::ArtistId.eq(artist_id));
    }
    if let Some(at) = filter.starting_from {
        query = query.filter(shows::Column::StartTime.gte(at));
    }

    query
        .order_by_asc(shows::Column::StartTime)
        .order_by_asc(shows::Column::Id)
        .into_model::<ShowRow>()
        .all(conn)
        .await
}

pub async fn ids_for_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rows = show_venues::Entity::find()
        .filter(show_venues::Column::VenueId.eq(venue_id))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| r.show_id).collect())
}

pub async fn ids_for_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rows = show_artists::Entity::find()
        .filter(show_artists::Column::ArtistId.eq(artist_id))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| r.show_id).collect())
}

/// Delete the given shows and their join rows; returns the number of shows removed.
pub async fn delete_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }
    show_artists::Entity::delete_many()
        .filter(show_artists::Column::ShowId.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    show_venues::Entity::delete_many()
        .filter(show_venues::Column::ShowId.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    let res = shows::Entity::delete_many()
        .filter(shows::Column::Id.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

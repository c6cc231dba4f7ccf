//! SeaORM adapter for artists.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::contains_pattern;
use crate::entities::artists;

pub mod dto;

pub use dto::ArtistWrite;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find()
        .order_by_asc(artists::Column::Name)
        .order_by_asc(artists::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find_by_id(id).one(conn).await
}

/// Case-insensitive substring match on name, city or state, ordered by name.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<artists::Model>, sea_orm::DbErr> {
    let matches = |col: artists::Column| {
        Expr::expr(Func::lower(Expr::col(col))).like(contains_pattern(term))
    };
    artists::Entity::find()
        .filter(
            Condition::any()
                .add(matches(artists::Column::Name))
                .add(matches(artists::Column::City))
                .add(matches(artists::Column::State)),
        )
        .order_by_asc(artists::Column::Name)
        .order_by_asc(artists::Column::Id)
        .all(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ArtistWrite,
) -> Result<artists::Model, sea_orm::DbErr> {
    active_model(NotSet, dto).insert(conn).await
}

/// Overwrite every column. Errors with `RecordNotUpdated` when the id does not exist.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ArtistWrite,
) -> Result<artists::Model, sea_orm::DbErr> {
    active_model(Set(id), dto).update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = artists::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn active_model(id: ActiveValue<i64>, dto: ArtistWrite) -> artists::ActiveModel {
    artists::ActiveModel {
        id,
        name: Set(dto.name),
        city: Set(dto.city),
        state: Set(dto.state),
        phone: Set(dto.phone),
        genres: Set(dto.genres),
        image_link: Set(dto.image_link),
        facebook_link: Set(dto.facebook_link),
        website: Set(dto.website),
        seeking_venue: Set(dto.seeking_venue),
    }
}

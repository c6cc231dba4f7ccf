//! SeaORM adapter for venues.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::contains_pattern;
use crate::entities::venues;

pub mod dto;

pub use dto::VenueWrite;

/// All venues ordered by state, city, then name.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find()
        .order_by_asc(venues::Column::State)
        .order_by_asc(venues::Column::City)
        .order_by_asc(venues::Column::Name)
        .order_by_asc(venues::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find_by_id(id).one(conn).await
}

/// Case-insensitive substring match on name, city or state, ordered by name.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<venues::Model>, sea_orm::DbErr> {
    let matches = |col: venues::Column| {
        Expr::expr(Func::lower(Expr::col(col))).like(contains_pattern(term))
    };
    venues::Entity::find()
        .filter(
            Condition::any()
                .add(matches(venues::Column::Name))
                .add(matches(venues::Column::City))
                .add(matches(venues::Column::State)),
        )
        .order_by_asc(venues::Column::Name)
        .order_by_asc(venues::Column::Id)
        .all(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VenueWrite,
) -> Result<venues::Model, sea_orm::DbErr> {
    active_model(NotSet, dto).insert(conn).await
}

/// Overwrite every column. Errors with `RecordNotUpdated` when the id does not exist.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: VenueWrite,
) -> Result<venues::Model, sea_orm::DbErr> {
    active_model(Set(id), dto).update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = venues::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn active_model(id: ActiveValue<i64>, dto: VenueWrite) -> venues::ActiveModel {
    venues::ActiveModel {
        id,
        name: Set(dto.name),
        city: Set(dto.city),
        state: Set(dto.state),
        address: Set(dto.address),
        phone: Set(dto.phone),
        genres: Set(dto.genres),
        image_link: Set(dto.image_link),
        facebook_link: Set(dto.facebook_link),
        website: Set(dto.website),
        seeking_talent: Set(dto.seeking_talent),
    }
}

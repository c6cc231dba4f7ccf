//! SeaORM adapter for drinks.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::drinks;

pub mod dto;

pub use dto::{DrinkCreate, DrinkUpdate};

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<drinks::Model>, sea_orm::DbErr> {
    drinks::Entity::find()
        .order_by_asc(drinks::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<drinks::Model>, sea_orm::DbErr> {
    drinks::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DrinkCreate,
) -> Result<drinks::Model, sea_orm::DbErr> {
    drinks::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        recipe: Set(dto.recipe),
    }
    .insert(conn)
    .await
}

/// Errors with `RecordNotUpdated` when the id does not exist.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DrinkUpdate,
) -> Result<drinks::Model, sea_orm::DbErr> {
    let active = drinks::ActiveModel {
        id: Set(dto.id),
        title: dto.title.map(Set).unwrap_or(NotSet),
        recipe: dto.recipe.map(Set).unwrap_or(NotSet),
    };
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = drinks::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

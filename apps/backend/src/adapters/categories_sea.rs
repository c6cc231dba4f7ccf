//! SeaORM adapter for categories.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder};

use crate::entities::categories;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(id).one(conn).await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    categories::Entity::find().count(conn).await
}

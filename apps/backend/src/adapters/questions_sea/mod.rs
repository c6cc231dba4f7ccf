//! SeaORM adapter for questions.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::contains_pattern;
use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: i64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Category.eq(category))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    questions::Entity::find().count(conn).await
}

/// One page window, ordered by id.
pub async fn list_window<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

/// Case-insensitive substring match on the question text, ordered by text.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(questions::Column::Question)))
                .like(contains_pattern(term)),
        )
        .order_by_asc(questions::Column::Question)
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    questions::ActiveModel {
        id: NotSet,
        question: Set(dto.question),
        answer: Set(dto.answer),
        category: Set(dto.category),
        difficulty: Set(dto.difficulty),
    }
    .insert(conn)
    .await
}

/// Delete by id; returns the number of rows removed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = questions::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

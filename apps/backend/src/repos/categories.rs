//! Category repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::domain::question::{Category, CategoryId};
use crate::entities::categories;
use crate::errors::domain::DomainError;

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            label: model.kind,
        }
    }
}

/// All categories ordered by id.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let rows = categories_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Category::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: CategoryId,
) -> Result<Option<Category>, DomainError> {
    let row = categories_adapter::find_by_id(conn, id).await?;
    Ok(row.map(Category::from))
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(categories_adapter::count_all(conn).await?)
}

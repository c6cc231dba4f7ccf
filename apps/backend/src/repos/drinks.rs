//! Drink repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::drinks_sea as drinks_adapter;
use crate::domain::drink::Drink;
use crate::domain::recipe::Recipe;
use crate::entities::drinks;
use crate::errors::domain::{DomainError, NotFoundKind};

impl TryFrom<drinks::Model> for Drink {
    type Error = DomainError;

    fn try_from(model: drinks::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            recipe: Recipe::from_storage(&model.recipe)?,
        })
    }
}

fn drink_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Drink, format!("Drink {id} not found"))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Drink>, DomainError> {
    drinks_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(Drink::try_from)
        .collect()
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Drink>, DomainError> {
    drinks_adapter::find_by_id(conn, id)
        .await?
        .map(Drink::try_from)
        .transpose()
}

/// Insert a drink. A duplicate title surfaces as `ConflictKind::DrinkTitle`.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: String,
    recipe: &Recipe,
) -> Result<Drink, DomainError> {
    let dto = drinks_adapter::DrinkCreate::new(title, recipe.to_storage()?);
    Drink::try_from(drinks_adapter::create(conn, dto).await?)
}

/// Apply the given fields to an existing drink.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    title: Option<String>,
    recipe: Option<&Recipe>,
) -> Result<Drink, DomainError> {
    if find_by_id(conn, id).await?.is_none() {
        return Err(drink_not_found(id));
    }

    let mut dto = drinks_adapter::DrinkUpdate::new(id);
    if let Some(title) = title {
        dto = dto.with_title(title);
    }
    if let Some(recipe) = recipe {
        dto = dto.with_recipe(recipe.to_storage()?);
    }
    Drink::try_from(drinks_adapter::update(conn, dto).await?)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match drinks_adapter::delete_by_id(conn, id).await? {
        0 => Err(drink_not_found(id)),
        _ => Ok(()),
    }
}

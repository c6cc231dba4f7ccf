//! Coffee-shop drink service.

use sea_orm::ConnectionTrait;
use serde_json::Value;
use tracing::info;

use crate::domain::drink::{normalize_title, Drink};
use crate::domain::recipe::Recipe;
use crate::errors::domain::DomainError;
use crate::repos::drinks;

pub struct DrinkService;

impl DrinkService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Drink>, DomainError> {
        drinks::list_all(conn).await
    }

    /// Both fields are required; they arrive as options so that a missing
    /// one is a validation failure rather than a parse failure.
    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        title: Option<String>,
        recipe: Option<Value>,
    ) -> Result<Drink, DomainError> {
        let title = title.ok_or_else(|| DomainError::validation("title is required"))?;
        let recipe = recipe.ok_or_else(|| DomainError::validation("recipe is required"))?;

        let title = normalize_title(&title)?;
        let recipe = Recipe::from_json(recipe)?;

        let drink = drinks::create(conn, title, &recipe).await?;
        info!(drink_id = drink.id, "drink_created");
        Ok(drink)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        title: Option<String>,
        recipe: Option<Value>,
    ) -> Result<Drink, DomainError> {
        if title.is_none() && recipe.is_none() {
            return Err(DomainError::validation("provide a title or a recipe"));
        }

        let title = title.as_deref().map(normalize_title).transpose()?;
        let recipe = recipe.map(Recipe::from_json).transpose()?;

        let drink = drinks::update(conn, id, title, recipe.as_ref()).await?;
        info!(drink_id = drink.id, "drink_updated");
        Ok(drink)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        drinks::delete(conn, id).await?;
        info!(drink_id = id, "drink_deleted");
        Ok(())
    }
}

impl Default for DrinkService {
    fn default() -> Self {
        Self::new()
    }
}

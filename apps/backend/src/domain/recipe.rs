use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public view of an ingredient: what the drink looks like, not what is in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Non-empty, validated list of ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe(Vec<Ingredient>);

impl Recipe {
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, DomainError> {
        if ingredients.is_empty() {
            return Err(DomainError::validation("recipe needs at least one ingredient"));
        }
        for (i, ingredient) in ingredients.iter().enumerate() {
            if ingredient.name.trim().is_empty() || ingredient.color.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "ingredient {i} needs a name and a color"
                )));
            }
            if ingredient.parts == 0 {
                return Err(DomainError::validation(format!(
                    "ingredient {i} needs at least one part"
                )));
            }
        }
        Ok(Self(ingredients))
    }

    /// Accept either a single ingredient object or an array of them, as
    /// older clients post a lone object.
    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        let items = match value {
            Value::Array(items) => items,
            obj @ Value::Object(_) => vec![obj],
            _ => {
                return Err(DomainError::validation(
                    "recipe must be an ingredient object or a list of them",
                ))
            }
        };

        let ingredients = items
            .into_iter()
            .map(serde_json::from_value::<Ingredient>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                DomainError::validation(
                    "each ingredient needs a string name, a string color and integer parts",
                )
            })?;

        Self::new(ingredients)
    }

    /// Decode the `drinks.recipe` column.
    pub fn from_storage(raw: &str) -> Result<Self, DomainError> {
        let ingredients: Vec<Ingredient> = serde_json::from_str(raw).map_err(|_| {
            DomainError::infra(InfraErrorKind::DataCorruption, "Stored recipe is not valid JSON")
        })?;
        Ok(Self(ingredients))
    }

    pub fn to_storage(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.0).map_err(|_| {
            DomainError::infra(InfraErrorKind::DataCorruption, "Recipe could not be encoded")
        })
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.0
    }

    pub fn short(&self) -> Vec<ShortIngredient> {
        self.0
            .iter()
            .map(|i| ShortIngredient {
                color: i.color.clone(),
                parts: i.parts,
            })
            .collect()
    }
}

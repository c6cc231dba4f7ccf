use serde::Serialize;

use super::recipe::{Ingredient, Recipe, ShortIngredient};
use crate::errors::domain::DomainError;

pub const MAX_TITLE_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

/// Public representation: colors and proportions only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

/// Staff representation with ingredient names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkLong {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.short(),
        }
    }

    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.ingredients().to_vec(),
        }
    }
}

/// Trimmed, non-blank, at most 80 characters.
pub fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::validation("title must not be blank"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

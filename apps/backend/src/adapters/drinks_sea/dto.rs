//! DTOs for the drinks adapter. `recipe` is the encoded JSON column value.

#[derive(Debug, Clone)]
pub struct DrinkCreate {
    pub title: String,
    pub recipe: String,
}

impl DrinkCreate {
    pub fn new(title: impl Into<String>, recipe: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            recipe: recipe.into(),
        }
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct DrinkUpdate {
    pub id: i64,
    pub title: Option<String>,
    pub recipe: Option<String>,
}

impl DrinkUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            recipe: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = Some(recipe.into());
        self
    }
}

//! Insert shape for the `recipes_table` relational table
//! (`id serial primary key, title text not null, user_id text not null`).
//!
//! Nothing reads or writes the table yet; exports and the JSON output carry
//! `NewRecipe` so a future store can take them as-is.

use crate::recipes::RecipeVariant;
use serde::{Deserialize, Serialize};

/// `INSERT` shape; `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub user_id: String,
}

impl NewRecipe {
    pub fn from_variant(recipe: &RecipeVariant, user_id: &str) -> Self {
        Self {
            title: recipe.title.clone(),
            user_id: user_id.to_string(),
        }
    }
}

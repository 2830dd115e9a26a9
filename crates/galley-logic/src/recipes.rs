//! Deep-frying recipes and the validated recipe catalogue.
//!
//! A recipe maps one ingredient prototype to a result prototype after a
//! fixed cook time. The catalogue refuses to load two recipes for the same
//! ingredient, so lookup never depends on enumeration order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::tuning::DEFAULT_RECIPE_COOK_TIME;

/// A single deep-frying recipe as authored in content data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub id: String,
    /// Display name used by the guidebook listing.
    #[serde(default)]
    pub name: String,
    /// Prototype id of the item that goes into the oil.
    pub ingredient: String,
    /// Seconds of enabled frying before the ingredient turns into `result`.
    #[serde(rename = "time", default = "default_cook_time")]
    pub cook_time: u32,
    /// Prototype id spawned in place of the ingredient.
    pub result: String,
    /// Guidebook group this recipe is listed under.
    #[serde(default)]
    pub group: String,
}

fn default_cook_time() -> u32 {
    DEFAULT_RECIPE_COOK_TIME
}

impl RecipeDefinition {
    pub fn new(
        id: impl Into<String>,
        ingredient: impl Into<String>,
        cook_time: u32,
        result: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ingredient: ingredient.into(),
            cook_time,
            result: result.into(),
            group: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn cook_time_secs(&self) -> f64 {
        self.cook_time as f64
    }
}

/// Reasons a set of recipes cannot form a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    DuplicateId(String),
    /// Two recipes claim the same ingredient.
    AmbiguousIngredient {
        ingredient: String,
        first: String,
        second: String,
    },
    EmptyField { recipe: String, field: &'static str },
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueError::DuplicateId(id) => write!(f, "duplicate recipe id '{}'", id),
            CatalogueError::AmbiguousIngredient {
                ingredient,
                first,
                second,
            } => write!(
                f,
                "ingredient '{}' is claimed by both '{}' and '{}'",
                ingredient, first, second
            ),
            CatalogueError::EmptyField { recipe, field } => {
                write!(f, "recipe '{}' has an empty '{}'", recipe, field)
            }
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Recipes indexed by ingredient. Ingredients are unique by construction.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalogue {
    recipes: Vec<RecipeDefinition>,
    by_ingredient: BTreeMap<String, usize>,
}

impl RecipeCatalogue {
    pub fn new(recipes: Vec<RecipeDefinition>) -> Result<Self, CatalogueError> {
        let mut by_ingredient: BTreeMap<String, usize> = BTreeMap::new();
        let mut ids: BTreeSet<String> = BTreeSet::new();

        for (idx, recipe) in recipes.iter().enumerate() {
            for (field, value) in [
                ("id", &recipe.id),
                ("ingredient", &recipe.ingredient),
                ("result", &recipe.result),
            ] {
                if value.is_empty() {
                    return Err(CatalogueError::EmptyField {
                        recipe: recipe.id.clone(),
                        field,
                    });
                }
            }

            if !ids.insert(recipe.id.clone()) {
                return Err(CatalogueError::DuplicateId(recipe.id.clone()));
            }

            if let Some(&prev) = by_ingredient.get(&recipe.ingredient) {
                return Err(CatalogueError::AmbiguousIngredient {
                    ingredient: recipe.ingredient.clone(),
                    first: recipes[prev].id.clone(),
                    second: recipe.id.clone(),
                });
            }
            by_ingredient.insert(recipe.ingredient.clone(), idx);
        }

        Ok(Self {
            recipes,
            by_ingredient,
        })
    }

    /// The recipe whose ingredient is exactly `prototype`.
    pub fn find(&self, prototype: &str) -> Option<&RecipeDefinition> {
        self.by_ingredient
            .get(prototype)
            .map(|&idx| &self.recipes[idx])
    }

    pub fn get(&self, id: &str) -> Option<&RecipeDefinition> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes in a guidebook group, ordered by display name then id.
    pub fn group(&self, group: &str) -> Vec<&RecipeDefinition> {
        let mut listed: Vec<_> = self.recipes.iter().filter(|r| r.group == group).collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        listed
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeDefinition> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fries() -> RecipeDefinition {
        RecipeDefinition::new("RecipeFries", "FoodPotato", 10, "FoodFries")
    }

    #[test]
    fn test_find_by_ingredient() {
        let catalogue = RecipeCatalogue::new(vec![
            fries(),
            RecipeDefinition::new("RecipeDonut", "FoodDough", 8, "FoodDonut"),
        ])
        .unwrap();

        assert_eq!(catalogue.find("FoodPotato").unwrap().result, "FoodFries");
        assert_eq!(catalogue.find("FoodDough").unwrap().cook_time, 8);
        assert!(catalogue.find("FoodBanana").is_none());
    }

    #[test]
    fn test_rejects_ambiguous_ingredient() {
        let err = RecipeCatalogue::new(vec![
            fries(),
            RecipeDefinition::new("RecipeWedges", "FoodPotato", 12, "FoodWedges"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogueError::AmbiguousIngredient {
                ingredient: "FoodPotato".into(),
                first: "RecipeFries".into(),
                second: "RecipeWedges".into(),
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = RecipeCatalogue::new(vec![
            fries(),
            RecipeDefinition::new("RecipeFries", "FoodDough", 8, "FoodDonut"),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateId("RecipeFries".into()));
    }

    #[test]
    fn test_rejects_empty_result() {
        let err = RecipeCatalogue::new(vec![RecipeDefinition::new("R", "FoodPotato", 5, "")])
            .unwrap_err();
        assert!(matches!(err, CatalogueError::EmptyField { field: "result", .. }));
    }

    #[test]
    fn test_group_sorted_by_name() {
        let catalogue = RecipeCatalogue::new(vec![
            fries().with_name("Fries").with_group("Snacks"),
            RecipeDefinition::new("RecipeDonut", "FoodDough", 8, "FoodDonut")
                .with_name("Donut")
                .with_group("Snacks"),
            RecipeDefinition::new("RecipeFish", "FoodFish", 20, "FoodFriedFish")
                .with_name("Battered fish")
                .with_group("Mains"),
        ])
        .unwrap();

        let snacks: Vec<_> = catalogue.group("Snacks").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(snacks, vec!["Donut", "Fries"]);
        assert_eq!(catalogue.group("Mains").len(), 1);
        assert!(catalogue.group("Desserts").is_empty());
    }
}

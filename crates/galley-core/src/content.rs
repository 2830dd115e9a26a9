//! Content data: recipes and entity prototypes loaded from JSON.
//!
//! The built-in content ships in `data/kitchen_content.json` at the
//! workspace root. Loading validates the recipe catalogue, so an ambiguous
//! recipe set never reaches the fryer.

use std::collections::BTreeMap;

use galley_logic::items::ItemSize;
use galley_logic::recipes::{CatalogueError, RecipeCatalogue, RecipeDefinition};
use hecs::{Entity, EntityBuilder, World};
use serde::{Deserialize, Serialize};

use crate::components::{Damageable, Item, Name, Position, Prototype, Vec3};

const BUILTIN_CONTENT: &str = include_str!("../../../data/kitchen_content.json");

/// An entity template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPrototype {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: ItemSize,
    #[serde(default)]
    pub damageable: bool,
}

impl EntityPrototype {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: ItemSize::default(),
            damageable: false,
        }
    }
}

/// Raw content file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub recipes: Vec<RecipeDefinition>,
    #[serde(default)]
    pub prototypes: Vec<EntityPrototype>,
}

/// Errors that can occur while loading content
#[derive(Debug)]
pub enum ContentError {
    Json(serde_json::Error),
    Catalogue(CatalogueError),
    DuplicatePrototype(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Json(e)
    }
}

impl From<CatalogueError> for ContentError {
    fn from(e: CatalogueError) -> Self {
        ContentError::Catalogue(e)
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Json(e) => write!(f, "Content parse error: {}", e),
            ContentError::Catalogue(e) => write!(f, "Invalid recipe catalogue: {}", e),
            ContentError::DuplicatePrototype(id) => write!(f, "Duplicate prototype '{}'", id),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Json(e) => Some(e),
            ContentError::Catalogue(e) => Some(e),
            ContentError::DuplicatePrototype(_) => None,
        }
    }
}

/// Validated content
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub catalogue: RecipeCatalogue,
    pub prototypes: BTreeMap<String, EntityPrototype>,
}

impl Content {
    pub fn new(
        recipes: Vec<RecipeDefinition>,
        prototypes: Vec<EntityPrototype>,
    ) -> Result<Self, ContentError> {
        let catalogue = RecipeCatalogue::new(recipes)?;

        let mut by_id = BTreeMap::new();
        for proto in prototypes {
            if by_id.contains_key(&proto.id) {
                return Err(ContentError::DuplicatePrototype(proto.id));
            }
            by_id.insert(proto.id.clone(), proto);
        }

        for recipe in catalogue.iter() {
            if !by_id.contains_key(&recipe.result) {
                log::warn!(
                    "Recipe {} produces unknown prototype {}",
                    recipe.id,
                    recipe.result
                );
            }
        }

        Ok(Self {
            catalogue,
            prototypes: by_id,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        let content = Self::new(file.recipes, file.prototypes)?;
        log::info!(
            "Loaded {} deep-frying recipes and {} prototypes",
            content.catalogue.len(),
            content.prototypes.len()
        );
        Ok(content)
    }

    /// The content bundled with the crate
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn prototype(&self, id: &str) -> Option<&EntityPrototype> {
        self.prototypes.get(id)
    }
}

/// Spawn an item from a prototype id at a position.
///
/// Unknown ids still spawn a bare item named after the id, so a recipe that
/// points at missing content degrades instead of failing.
pub fn spawn_prototype(world: &mut World, content: &Content, id: &str, at: Vec3) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add(Prototype(id.to_string())).add(Position(at));

    match content.prototype(id) {
        Some(proto) => {
            builder
                .add(Name::new(proto.name.clone()))
                .add(Item { size: proto.size });
            if proto.damageable {
                builder.add(Damageable::new());
            }
        }
        None => {
            builder.add(Name::new(id)).add(Item::default());
        }
    }

    world.spawn(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_loads() {
        let content = Content::builtin().expect("builtin content");
        assert!(!content.catalogue.is_empty());
        assert!(content.prototype("FoodBadRecipe").is_some());
        for recipe in content.catalogue.iter() {
            assert!(
                content.prototype(&recipe.ingredient).is_some(),
                "missing ingredient prototype {}",
                recipe.ingredient
            );
            assert!(
                content.prototype(&recipe.result).is_some(),
                "missing result prototype {}",
                recipe.result
            );
        }
    }

    #[test]
    fn test_ambiguous_json_rejected() {
        let json = r#"{
            "recipes": [
                { "id": "A", "ingredient": "FoodPotato", "time": 10, "result": "FoodFries" },
                { "id": "B", "ingredient": "FoodPotato", "time": 12, "result": "FoodWedges" }
            ]
        }"#;
        let err = Content::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Catalogue(CatalogueError::AmbiguousIngredient { .. })
        ));
    }

    #[test]
    fn test_recipe_time_defaults() {
        let json = r#"{ "recipes": [ { "id": "A", "ingredient": "X", "result": "Y" } ] }"#;
        let content = Content::from_json(json).unwrap();
        assert_eq!(content.catalogue.find("X").unwrap().cook_time, 5);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Content::from_json("{ nope"), Err(ContentError::Json(_))));
    }

    #[test]
    fn test_duplicate_prototype() {
        let err = Content::new(
            vec![],
            vec![
                EntityPrototype::new("FoodPotato", "potato"),
                EntityPrototype::new("FoodPotato", "spud"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicatePrototype(id) if id == "FoodPotato"));
    }

    #[test]
    fn test_spawn_prototype() {
        let mut content = Content::default();
        let mut mouse = EntityPrototype::new("MobMouse", "mouse");
        mouse.size = ItemSize::Tiny;
        mouse.damageable = true;
        content.prototypes.insert(mouse.id.clone(), mouse);

        let mut world = World::new();
        let e = spawn_prototype(&mut world, &content, "MobMouse", Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(world.get::<&Name>(e).unwrap().as_str(), "mouse");
        assert_eq!(world.get::<&Item>(e).unwrap().size, ItemSize::Tiny);
        assert!(world.get::<&Damageable>(e).is_ok());

        let unknown = spawn_prototype(&mut world, &content, "Mystery", Vec3::ZERO);
        assert_eq!(world.get::<&Name>(unknown).unwrap().as_str(), "Mystery");
        assert!(world.get::<&Damageable>(unknown).is_err());
    }
}

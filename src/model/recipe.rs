use super::{Ingredient, IngredientCategory};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailRecipe {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "englishDescription")]
    pub description: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl CocktailRecipe {
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        let name = name.into();
        Self {
            id: Self::slug(&name),
            name,
            description: String::new(),
            method: String::new(),
            ingredients,
        }
    }

    /// Lowercased id with every run of non-alphanumerics collapsed to `-`.
    #[must_use]
    pub fn slug(name: &str) -> String {
        let mut slug = String::with_capacity(name.len());
        let mut pending_dash = false;
        for ch in name.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_dash {
                    slug.push('-');
                    pending_dash = false;
                }
                slug.push(ch);
            } else {
                pending_dash = true;
            }
        }
        if pending_dash {
            slug.push('-');
        }
        slug
    }
}

/// Ordered list of recipes. Lookups by name ignore case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeCatalog {
    recipes: Vec<CocktailRecipe>,
}

impl RecipeCatalog {
    #[must_use]
    pub fn new(recipes: Vec<CocktailRecipe>) -> Self {
        Self { recipes }
    }

    /// The default menu shipped with the binary.
    #[must_use]
    pub fn bundled() -> Self {
        use IngredientCategory::{Alcohol, Garnish, Glass, Juice, Syrup};

        let mut butterfly = CocktailRecipe::new(
            "The Butterfly",
            vec![
                Ingredient::new("Gin", Alcohol, 2.0, "oz", Some(26.0)),
                Ingredient::new("Butterfly Pea Syrup", Syrup, 0.75, "oz", Some(26.0)),
                Ingredient::new("Lemon Juice", Juice, 0.75, "oz", Some(26.0)),
                Ingredient::new("Eggwhite", Juice, 1.0, "splash", Some(8.0)),
                Ingredient::new("Pea Flowers", Garnish, 1.0, "garnish", Some(26.0)),
                Ingredient::new("Low Ball", Glass, 1.0, "glass", Some(26.0)),
            ],
        );
        butterfly.description = "Butterfly pea, lemon, Gin, Eggwhites".to_string();
        butterfly.method = "ADD all ingredients to the shaker. DRY SHAKE for 15 seconds. \
                            ADD ice and SHAKE again. POUR into a glass. TOP with more ice if needed. GARNISH."
            .to_string();

        Self::new(vec![butterfly])
    }

    /// Falls back to the bundled menu when an imported sheet held no recipes.
    #[must_use]
    pub fn or_bundled(self) -> Self {
        if self.is_empty() {
            warn!("[RECIPES] Recipe sheet has no recipes; using the bundled menu");
            Self::bundled()
        } else {
            self
        }
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CocktailRecipe> {
        let name = name.to_lowercase();
        self.recipes.iter().find(|r| r.name.to_lowercase() == name)
    }

    pub fn push(&mut self, recipe: CocktailRecipe) {
        self.recipes.push(recipe);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CocktailRecipe> {
        self.recipes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<CocktailRecipe>> for RecipeCatalog {
    fn from(recipes: Vec<CocktailRecipe>) -> Self {
        Self::new(recipes)
    }
}

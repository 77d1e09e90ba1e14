use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven fixed packing categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum IngredientCategory {
    Alcohol,
    Syrup,
    Juice,
    Garnish,
    Glass,
    Soda,
    Others,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 7] = [
        IngredientCategory::Alcohol,
        IngredientCategory::Syrup,
        IngredientCategory::Juice,
        IngredientCategory::Garnish,
        IngredientCategory::Glass,
        IngredientCategory::Soda,
        IngredientCategory::Others,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IngredientCategory::Alcohol => "alcohol",
            IngredientCategory::Syrup => "syrup",
            IngredientCategory::Juice => "juice",
            IngredientCategory::Garnish => "garnish",
            IngredientCategory::Glass => "glass",
            IngredientCategory::Soda => "soda",
            IngredientCategory::Others => "others",
        }
    }

    /// Maps a sheet label to a category. Unknown or blank labels land in `Others`.
    #[must_use]
    pub fn parse_lenient(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .unwrap_or(IngredientCategory::Others)
    }
}

impl From<String> for IngredientCategory {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "type")]
    pub category: IngredientCategory,
    pub quantity_per_drink: f64,
    pub unit: String,
    /// Volume or count per purchasable unit. `None` means one unit is one container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<f64>,
}

impl Ingredient {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: IngredientCategory,
        quantity_per_drink: f64,
        unit: impl Into<String>,
        container_size: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            quantity_per_drink,
            unit: unit.into(),
            container_size,
        }
    }

    #[must_use]
    pub fn is_splash(&self) -> bool {
        self.unit.trim().eq_ignore_ascii_case("splash")
    }

    /// Case-insensitive substring match on the ingredient name.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

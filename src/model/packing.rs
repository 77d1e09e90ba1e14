use super::IngredientCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    pub name: String,
    /// Volume in the line's measure; 0 for purely count-based items.
    pub quantity_needed_oz: f64,
    pub containers_needed: u64,
    pub unit: String,
    pub breakdown: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_drinks: u64,
    pub drinks_per_cocktail: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingList {
    pub event_id: String,
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub categories: BTreeMap<IngredientCategory, Vec<PackingItem>>,
}

impl PackingList {
    /// A list with every category present and nothing in it.
    #[must_use]
    pub fn empty(event_id: impl Into<String>) -> Self {
        Self::new(event_id, Summary::default())
    }

    #[must_use]
    pub fn new(event_id: impl Into<String>, summary: Summary) -> Self {
        Self {
            event_id: event_id.into(),
            generated_at: Utc::now(),
            summary,
            categories: IngredientCategory::ALL
                .into_iter()
                .map(|c| (c, Vec::new()))
                .collect(),
        }
    }

    #[must_use]
    pub fn items(&self, category: IngredientCategory) -> &[PackingItem] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn items_mut(&mut self, category: IngredientCategory) -> &mut Vec<PackingItem> {
        self.categories.entry(category).or_default()
    }

    #[must_use]
    pub fn find(&self, category: IngredientCategory, name: &str) -> Option<&PackingItem> {
        let name = name.to_lowercase();
        self.items(category)
            .iter()
            .find(|item| item.name.to_lowercase() == name)
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

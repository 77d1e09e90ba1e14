//! Packing-list calculation.
//!
//! [`compute_packing_list`] picks one of two strategies from the event type,
//! accumulates ingredient lines by name, buckets them by category and then
//! tops the result up with backstop stock.

mod bar_service;
mod workshop;

use crate::error::EngineError;
use crate::model::{
    CocktailRecipe, Event, EventType, Ingredient, IngredientCategory, PackingItem, PackingList,
    RecipeCatalog, Summary,
};
use log::{error, warn};
use std::collections::HashMap;

/// Per-serving volume assumed for any "splash" unit, in oz.
pub const SPLASH_ESTIMATE_OZ: f64 = 0.25;

/// Glassware is swapped for this line when no glass rental is booked.
pub const PLASTIC_CUP: &str = "Plastic Cup";

/// Plastic cups carry a 20% buffer over headcount: 6 cups for every 5 guests.
pub const PLASTIC_CUP_BUFFER: (u64, u64) = (6, 5);

/// Workshop kits: attendees served by one bottle of each spirit.
pub const WORKSHOP_ALCOHOL_PER_BOTTLE: u64 = 5;
/// Size of a workshop spirit bottle, in oz.
pub const WORKSHOP_ALCOHOL_BOTTLE_OZ: u64 = 16;

/// Workshop kits: attendees served by one bottle of syrup, citrus or egg white.
pub const WORKSHOP_SYRUP_PER_BOTTLE: u64 = 4;
/// Size of a workshop syrup bottle, in oz.
pub const WORKSHOP_SYRUP_BOTTLE_OZ: u64 = 4;

/// Name fragments that get the workshop syrup ratio regardless of category.
pub const WORKSHOP_SYRUP_NAME_MATCHES: &[&str] = &["lemon", "lime", "egg"];

/// Workshop kits: one garnish jar per 5 attendees.
pub const WORKSHOP_GARNISH_PER_JAR: u64 = 5;

/// Bar service "white bucket" mixers: (name, containers, unit).
pub const WHITE_BUCKET: &[(&str, u64, &str)] = &[
    ("Sprite", 6, "cans"),
    ("Ginger Ale", 6, "cans"),
    ("Coke", 6, "cans"),
    ("Tonic Water", 6, "cans"),
    ("Club Soda", 6, "cans"),
    ("Club Soda (2L)", 1, "bottle"),
];

/// Spirits a bar service always carries unless the client supplies alcohol.
pub const CORE_SPIRITS: &[&str] = &["Vodka", "Gin", "Rum", "Tequila", "Whiskey", "Triple Sec"];

/// Syrups every event carries.
pub const ESSENTIAL_SYRUPS: &[&str] = &["Simple Syrup", "Butterfly Pea Syrup"];

/// Event id used when the event itself is absent.
pub const MISSING_EVENT_ID: &str = "error";

const BACKSTOP_BREAKDOWN: &str = "Bar Essential / Backup";
const BACKSTOP_UNIT: &str = "bottle";

/// Calculates the packing list for an event.
///
/// Never fails: a missing event or a malformed recipe is logged and yields an
/// empty list with all seven categories present.
#[must_use]
pub fn compute_packing_list(event: Option<&Event>, recipes: &RecipeCatalog) -> PackingList {
    match try_compute_packing_list(event, recipes) {
        Ok(list) => list,
        Err(e) => {
            error!("[ENGINE] Critical error during packing list calculation: {e}");
            let event_id = event.map_or(MISSING_EVENT_ID, |ev| ev.id.as_str());
            PackingList::empty(event_id)
        }
    }
}

/// Same calculation as [`compute_packing_list`] with faults surfaced.
pub fn try_compute_packing_list(
    event: Option<&Event>,
    recipes: &RecipeCatalog,
) -> Result<PackingList, EngineError> {
    let event = event.ok_or(EngineError::MissingEvent)?;

    let mut list = match event.event_type {
        EventType::Workshop => workshop::accumulate(event, recipes)?.into_list(event),
        EventType::BarService => {
            let mut list = bar_service::accumulate(event, recipes)?.into_list(event);
            if !event.client_supplies_alcohol {
                for spirit in CORE_SPIRITS {
                    ensure_essential(&mut list, spirit, IngredientCategory::Alcohol, 1);
                }
            }
            list
        }
    };

    for syrup in ESSENTIAL_SYRUPS {
        ensure_essential(&mut list, syrup, IngredientCategory::Syrup, 1);
    }

    Ok(list)
}

/// Adds a backstop line to `category` unless an item with that name is already there.
fn ensure_essential(
    list: &mut PackingList,
    name: &str,
    category: IngredientCategory,
    min_containers: u64,
) {
    if list.find(category, name).is_some() {
        return;
    }
    list.items_mut(category).push(PackingItem {
        name: name.to_string(),
        quantity_needed_oz: 0.0,
        containers_needed: min_containers,
        unit: BACKSTOP_UNIT.to_string(),
        breakdown: BACKSTOP_BREAKDOWN.to_string(),
    });
}

/// Recipes for the event's selections, in selection order. Unknown names are skipped.
fn selected_recipes<'a>(
    event: &'a Event,
    recipes: &'a RecipeCatalog,
) -> impl Iterator<Item = &'a CocktailRecipe> + 'a {
    event.cocktail_selections.iter().filter_map(move |selection| {
        let recipe = recipes.find(selection);
        if recipe.is_none() {
            warn!("[ENGINE] Recipe not found for selection: \"{selection}\". Skipping.");
        }
        recipe
    })
}

fn is_excluded(event: &Event, ingredient: &Ingredient) -> bool {
    event.client_supplies_alcohol && ingredient.category == IngredientCategory::Alcohol
}

fn validate(recipe: &CocktailRecipe, ingredient: &Ingredient) -> Result<(), EngineError> {
    let malformed = |reason: String| EngineError::MalformedIngredient {
        recipe: recipe.name.clone(),
        ingredient: ingredient.name.clone(),
        reason,
    };

    let qty = ingredient.quantity_per_drink;
    if !qty.is_finite() || qty < 0.0 {
        return Err(malformed(format!("quantity per drink is {qty}")));
    }
    if let Some(size) = ingredient.container_size {
        if !size.is_finite() || size <= 0.0 {
            return Err(malformed(format!("container size is {size}")));
        }
    }
    Ok(())
}

/// Plastic cups for a headcount, buffer included.
fn plastic_cups(headcount: u32) -> u64 {
    let (cups, guests) = PLASTIC_CUP_BUFFER;
    (u64::from(headcount) * cups).div_ceil(guests)
}

fn ceil_count(value: f64) -> u64 {
    value.ceil() as u64
}

/// Rounds to one decimal for breakdown text.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

struct Entry {
    category: IngredientCategory,
    item: PackingItem,
}

/// Ingredient lines keyed by case-insensitive name, kept in first-seen order.
#[derive(Default)]
struct Accumulator {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    fn get_mut(&mut self, name: &str) -> Option<&mut PackingItem> {
        let idx = *self.index.get(&name.to_lowercase())?;
        Some(&mut self.entries[idx].item)
    }

    fn insert(&mut self, category: IngredientCategory, item: PackingItem) {
        self.index
            .insert(item.name.to_lowercase(), self.entries.len());
        self.entries.push(Entry { category, item });
    }

    fn into_list(self, event: &Event) -> PackingList {
        let headcount = u64::from(event.headcount);
        let summary = Summary {
            total_drinks: headcount * event.cocktail_selections.len() as u64,
            drinks_per_cocktail: headcount,
        };

        let mut list = PackingList::new(event.id.clone(), summary);
        for entry in self.entries {
            list.items_mut(entry.category).push(entry.item);
        }
        list
    }
}

//! Bar service: volume-driven math, one serving of each selected cocktail per guest.

use super::{
    ceil_count, is_excluded, plastic_cups, round1, selected_recipes, validate, Accumulator,
    PLASTIC_CUP, SPLASH_ESTIMATE_OZ, WHITE_BUCKET,
};
use crate::error::EngineError;
use crate::model::{Event, IngredientCategory, PackingItem, RecipeCatalog};

pub(super) fn accumulate(
    event: &Event,
    recipes: &RecipeCatalog,
) -> Result<Accumulator, EngineError> {
    let drinks_per_cocktail = f64::from(event.headcount);
    let use_plastic = !event.glass_rental.required;
    let mut acc = Accumulator::default();

    for recipe in selected_recipes(event, recipes) {
        for ing in &recipe.ingredients {
            if is_excluded(event, ing) {
                continue;
            }
            validate(recipe, ing)?;

            let qty_per_drink = if ing.is_splash() {
                SPLASH_ESTIMATE_OZ
            } else {
                ing.quantity_per_drink
            };
            let total_qty = qty_per_drink * drinks_per_cocktail;

            let is_plastic_cup = ing.category == IngredientCategory::Glass && use_plastic;
            let (name, containers) = if is_plastic_cup {
                (PLASTIC_CUP, plastic_cups(event.headcount))
            } else {
                (ing.name.as_str(), containers_for(total_qty, ing.container_size))
            };
            let trace = format!("{} ({} oz)", recipe.name, round1(total_qty));

            if let Some(existing) = acc.get_mut(name) {
                existing.quantity_needed_oz += total_qty;
                // Re-derive from the running total so per-recipe rounding doesn't stack
                existing.containers_needed = if is_plastic_cup {
                    existing.containers_needed.saturating_add(containers)
                } else {
                    containers_for(existing.quantity_needed_oz, ing.container_size)
                };
                existing.breakdown.push_str(", ");
                existing.breakdown.push_str(&trace);
            } else {
                let unit = if ing.is_splash() {
                    "oz (est)".to_string()
                } else {
                    ing.unit.clone()
                };
                acc.insert(
                    ing.category,
                    PackingItem {
                        name: name.to_string(),
                        quantity_needed_oz: total_qty,
                        containers_needed: containers,
                        unit,
                        breakdown: trace,
                    },
                );
            }
        }
    }

    for &(name, count, unit) in WHITE_BUCKET {
        add_white_bucket_item(&mut acc, name, count, unit);
    }

    Ok(acc)
}

/// Containers for a volume; count-based items (no container size) are one per unit.
fn containers_for(total_qty: f64, container_size: Option<f64>) -> u64 {
    match container_size {
        Some(size) => ceil_count(total_qty / size),
        None => ceil_count(total_qty),
    }
}

fn add_white_bucket_item(acc: &mut Accumulator, name: &str, count: u64, unit: &str) {
    if let Some(existing) = acc.get_mut(name) {
        existing.containers_needed = existing.containers_needed.saturating_add(count);
        existing
            .breakdown
            .push_str(&format!(", White Bucket (+{count})"));
        return;
    }
    acc.insert(
        IngredientCategory::Soda,
        PackingItem {
            name: name.to_string(),
            quantity_needed_oz: 0.0,
            containers_needed: count,
            unit: unit.to_string(),
            breakdown: "White Bucket Essential".to_string(),
        },
    );
}

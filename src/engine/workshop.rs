//! Workshop: kits sized by attendee ratios instead of drink volume.

use super::{
    is_excluded, plastic_cups, selected_recipes, validate, Accumulator, PLASTIC_CUP,
    WORKSHOP_ALCOHOL_BOTTLE_OZ, WORKSHOP_ALCOHOL_PER_BOTTLE, WORKSHOP_GARNISH_PER_JAR,
    WORKSHOP_SYRUP_BOTTLE_OZ, WORKSHOP_SYRUP_NAME_MATCHES, WORKSHOP_SYRUP_PER_BOTTLE,
};
use crate::error::EngineError;
use crate::model::{Event, Ingredient, IngredientCategory, PackingItem, RecipeCatalog};

struct KitLine {
    containers: u64,
    quantity: f64,
    unit: String,
    rule: &'static str,
}

pub(super) fn accumulate(
    event: &Event,
    recipes: &RecipeCatalog,
) -> Result<Accumulator, EngineError> {
    let use_plastic = !event.glass_rental.required;
    let mut acc = Accumulator::default();

    for recipe in selected_recipes(event, recipes) {
        for ing in &recipe.ingredients {
            if is_excluded(event, ing) {
                continue;
            }
            validate(recipe, ing)?;

            let name = if ing.category == IngredientCategory::Glass && use_plastic {
                PLASTIC_CUP
            } else {
                ing.name.as_str()
            };
            let line = kit_line(ing, event.headcount, use_plastic);

            // Container counts add per recipe here, unlike bar service
            if let Some(existing) = acc.get_mut(name) {
                existing.containers_needed =
                    existing.containers_needed.saturating_add(line.containers);
                existing.quantity_needed_oz += line.quantity;
                existing.breakdown.push_str(", ");
                existing.breakdown.push_str(&recipe.name);
            } else {
                acc.insert(
                    ing.category,
                    PackingItem {
                        name: name.to_string(),
                        quantity_needed_oz: line.quantity,
                        containers_needed: line.containers,
                        unit: line.unit,
                        breakdown: format!("{} [{}]", recipe.name, line.rule),
                    },
                );
            }
        }
    }

    Ok(acc)
}

fn kit_line(ing: &Ingredient, headcount: u32, use_plastic: bool) -> KitLine {
    let guests = u64::from(headcount);

    // TODO: substring matching on "egg" also catches names like "Eggplant Garnish"; needs an explicit ingredient flag.
    let syrup_like = ing.category == IngredientCategory::Syrup
        || WORKSHOP_SYRUP_NAME_MATCHES
            .iter()
            .any(|needle| ing.name_contains(needle));

    if ing.category == IngredientCategory::Alcohol {
        let containers = guests.div_ceil(WORKSHOP_ALCOHOL_PER_BOTTLE);
        KitLine {
            containers,
            quantity: (containers * WORKSHOP_ALCOHOL_BOTTLE_OZ) as f64,
            unit: "oz".to_string(),
            rule: "16oz btl (1 per 5)",
        }
    } else if syrup_like {
        let containers = guests.div_ceil(WORKSHOP_SYRUP_PER_BOTTLE);
        KitLine {
            containers,
            quantity: (containers * WORKSHOP_SYRUP_BOTTLE_OZ) as f64,
            unit: "oz".to_string(),
            rule: "btl (1 per 4)",
        }
    } else if ing.category == IngredientCategory::Garnish {
        let containers = guests.div_ceil(WORKSHOP_GARNISH_PER_JAR);
        KitLine {
            containers,
            quantity: containers as f64,
            unit: "jars".to_string(),
            rule: "Jar (1 per 5)",
        }
    } else if ing.category == IngredientCategory::Glass && use_plastic {
        let containers = plastic_cups(headcount);
        KitLine {
            containers,
            quantity: containers as f64,
            unit: ing.unit.clone(),
            rule: "1.2 per person (Plastic)",
        }
    } else {
        KitLine {
            containers: guests,
            quantity: f64::from(headcount),
            unit: ing.unit.clone(),
            rule: "1 per person",
        }
    }
}

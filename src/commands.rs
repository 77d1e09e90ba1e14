//! Assistant command surface.
//!
//! A conversational front end issues fixed-schema commands such as
//! `{"name": "updateHeadcount", "args": {"newCount": 30}}`. Every command
//! except `generatePackingList` edits the session's event or catalog; only
//! that one runs the engine.

use crate::engine::compute_packing_list;
use crate::error::CommandError;
use crate::model::{CocktailRecipe, Event, EventStatus, GlassItem, PackingList, RecipeCatalog};
use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CocktailAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalAction {
    Add,
    Remove,
    Update,
    /// Glassware only: drop the rental and fall back to plastic.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalKind {
    Bar,
    Glass,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name", content = "args", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    UpdateHeadcount { new_count: f64 },
    GeneratePackingList,
    AddRecipe(CocktailRecipe),
    #[serde(rename_all = "camelCase")]
    UpdateEventCocktails {
        action: CocktailAction,
        cocktail_name: String,
    },
    UpdateEventDetails { field: String, value: String },
    #[serde(rename_all = "camelCase")]
    UpdateRentalItems {
        action: RentalAction,
        item_type: RentalKind,
        #[serde(default)]
        subtype: Option<String>,
        #[serde(default)]
        quantity: Option<f64>,
    },
}

impl Command {
    /// Parses one command document. A zero-argument command may send `{}`
    /// for its args or omit them.
    pub fn from_json(input: &str) -> Result<Self, CommandError> {
        let mut value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| CommandError::InvalidCommand {
                message: e.to_string(),
            })?;

        if value["name"] == "generatePackingList" {
            if let Some(obj) = value.as_object_mut() {
                obj.remove("args");
            }
        }

        serde_json::from_value(value).map_err(|e| CommandError::InvalidCommand {
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    EventUpdated,
    CatalogUpdated,
    PackingList(PackingList),
}

/// The event being edited plus the recipes available to it.
#[derive(Debug, Clone)]
pub struct Session {
    pub event: Event,
    pub catalog: RecipeCatalog,
}

impl Session {
    #[must_use]
    pub fn new(event: Event, catalog: RecipeCatalog) -> Self {
        Self { event, catalog }
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        debug!("[COMMANDS] Applying {command:?}");
        match command {
            Command::UpdateHeadcount { new_count } => {
                if !new_count.is_finite() || new_count < 0.0 || new_count > f64::from(u32::MAX) {
                    return Err(CommandError::InvalidHeadcount { value: new_count });
                }
                self.event.headcount = new_count.trunc() as u32;
                Ok(Outcome::EventUpdated)
            }
            Command::GeneratePackingList => Ok(Outcome::PackingList(compute_packing_list(
                Some(&self.event),
                &self.catalog,
            ))),
            Command::AddRecipe(recipe) => {
                self.add_recipe(recipe)?;
                Ok(Outcome::CatalogUpdated)
            }
            Command::UpdateEventCocktails {
                action,
                cocktail_name,
            } => {
                self.update_cocktails(action, &cocktail_name);
                Ok(Outcome::EventUpdated)
            }
            Command::UpdateEventDetails { field, value } => {
                self.update_details(&field, value)?;
                Ok(Outcome::EventUpdated)
            }
            Command::UpdateRentalItems {
                action,
                item_type,
                subtype,
                quantity,
            } => {
                match item_type {
                    RentalKind::Glass => self.update_glass(action, subtype, quantity)?,
                    RentalKind::Bar => self.update_bar(action, subtype),
                }
                Ok(Outcome::EventUpdated)
            }
        }
    }

    fn add_recipe(&mut self, mut recipe: CocktailRecipe) -> Result<(), CommandError> {
        recipe.name = recipe.name.trim().to_string();
        if recipe.name.is_empty() {
            return Err(CommandError::EmptyRecipeName);
        }
        if recipe.id.is_empty() {
            recipe.id = CocktailRecipe::slug(&recipe.name);
        }
        info!("[COMMANDS] Added recipe \"{}\"", recipe.name);
        self.catalog.push(recipe);
        Ok(())
    }

    fn update_cocktails(&mut self, action: CocktailAction, name: &str) {
        match action {
            CocktailAction::Add => {
                if self.event.has_selection(name) {
                    return;
                }
                // Prefer the catalog's spelling so the engine lookup stays exact
                let stored = self
                    .catalog
                    .find(name)
                    .map_or_else(|| name.to_string(), |r| r.name.clone());
                self.event.cocktail_selections.push(stored);
            }
            CocktailAction::Remove => {
                let lowered = name.to_lowercase();
                self.event
                    .cocktail_selections
                    .retain(|s| s.to_lowercase() != lowered);
            }
        }
    }

    fn update_details(&mut self, field: &str, value: String) -> Result<(), CommandError> {
        let event = &mut self.event;
        match field {
            "location" => event.location = value,
            "clientName" => event.client_name = value,
            "clientPhone" => event.client_phone = value,
            "status" => {
                event.status = EventStatus::parse(&value).ok_or_else(|| {
                    CommandError::InvalidValue {
                        field: field.to_string(),
                        value: value.clone(),
                    }
                })?;
            }
            "bartenderName" => event.bartender.name = value,
            "bartenderEmail" => event.bartender.email = value,
            "eventDate" => event.event_date = value,
            "endTime" => event.end_time = value,
            "isPaid" => {
                let value = value.trim().to_lowercase();
                event.is_paid = value == "true" || value == "yes";
            }
            _ => {
                return Err(CommandError::UnknownField {
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    fn update_glass(
        &mut self,
        action: RentalAction,
        subtype: Option<String>,
        quantity: Option<f64>,
    ) -> Result<(), CommandError> {
        let rental = &mut self.event.glass_rental;
        match action {
            RentalAction::Reset => {
                rental.required = false;
                rental.items.clear();
            }
            RentalAction::Remove => rental.required = false,
            RentalAction::Add | RentalAction::Update => {
                rental.required = true;
                let (Some(kind), Some(quantity)) = (subtype, quantity) else {
                    return Ok(());
                };
                if !quantity.is_finite() || quantity < 0.0 || quantity > f64::from(u32::MAX) {
                    return Err(CommandError::InvalidValue {
                        field: "quantity".to_string(),
                        value: quantity.to_string(),
                    });
                }
                let quantity = quantity.trunc() as u32;
                let lowered = kind.to_lowercase();
                match rental
                    .items
                    .iter_mut()
                    .find(|item| item.kind.to_lowercase() == lowered)
                {
                    Some(item) => item.quantity = quantity,
                    None => rental.items.push(GlassItem { kind, quantity }),
                }
            }
        }
        Ok(())
    }

    fn update_bar(&mut self, action: RentalAction, subtype: Option<String>) {
        let rental = &mut self.event.bar_rental;
        if action == RentalAction::Remove {
            rental.required = false;
            return;
        }
        rental.required = true;
        if let Some(subtype) = subtype {
            let lowered = subtype.to_lowercase();
            if lowered.contains("ft") || lowered.contains("mobile") {
                rental.size = Some(subtype);
            } else {
                rental.color = Some(subtype);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, IngredientCategory};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(
            Event::new("evt-1", EventType::BarService, 25).with_selections(["The Butterfly"]),
            RecipeCatalog::bundled(),
        )
    }

    fn apply(session: &mut Session, json: &str) -> Result<Outcome, CommandError> {
        session.apply(Command::from_json(json)?)
    }

    #[test]
    fn parses_commands_from_assistant_json() {
        assert_eq!(
            Command::from_json(r#"{"name":"updateHeadcount","args":{"newCount":30}}"#).unwrap(),
            Command::UpdateHeadcount { new_count: 30.0 }
        );
        assert_eq!(
            Command::from_json(r#"{"name":"generatePackingList","args":{}}"#).unwrap(),
            Command::GeneratePackingList
        );
        assert_eq!(
            Command::from_json(r#"{"name":"generatePackingList"}"#).unwrap(),
            Command::GeneratePackingList
        );
        assert!(matches!(
            Command::from_json(r#"{"name":"sing","args":{}}"#),
            Err(CommandError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn headcount_updates_and_rejects_negative() {
        let mut s = session();
        apply(&mut s, r#"{"name":"updateHeadcount","args":{"newCount":40.7}}"#).unwrap();
        assert_eq!(s.event.headcount, 40);

        let err = apply(&mut s, r#"{"name":"updateHeadcount","args":{"newCount":-3}}"#);
        assert_eq!(err, Err(CommandError::InvalidHeadcount { value: -3.0 }));
        assert_eq!(s.event.headcount, 40);
    }

    #[test]
    fn cocktail_add_dedupes_and_uses_catalog_spelling() {
        let mut s = session();
        s.event.cocktail_selections.clear();
        let add = r#"{"name":"updateEventCocktails","args":{"action":"add","cocktailName":"the butterfly"}}"#;
        apply(&mut s, add).unwrap();
        apply(&mut s, add).unwrap();
        assert_eq!(s.event.cocktail_selections, vec!["The Butterfly"]);

        apply(
            &mut s,
            r#"{"name":"updateEventCocktails","args":{"action":"remove","cocktailName":"THE BUTTERFLY"}}"#,
        )
        .unwrap();
        assert!(s.event.cocktail_selections.is_empty());
    }

    #[test]
    fn details_update_known_fields_only() {
        let mut s = session();
        apply(
            &mut s,
            r#"{"name":"updateEventDetails","args":{"field":"status","value":"ready for prep"}}"#,
        )
        .unwrap();
        apply(
            &mut s,
            r#"{"name":"updateEventDetails","args":{"field":"isPaid","value":"yes"}}"#,
        )
        .unwrap();
        assert_eq!(s.event.status, EventStatus::ReadyForPrep);
        assert!(s.event.is_paid);

        let err = apply(
            &mut s,
            r#"{"name":"updateEventDetails","args":{"field":"headcount","value":"3"}}"#,
        );
        assert_eq!(
            err,
            Err(CommandError::UnknownField {
                field: "headcount".to_string()
            })
        );
    }

    #[test]
    fn glass_rental_upsert_and_reset() {
        let mut s = session();
        let add = |kind: &str, qty: u32| {
            format!(
                r#"{{"name":"updateRentalItems","args":{{"action":"add","itemType":"glass","subtype":"{kind}","quantity":{qty}}}}}"#
            )
        };
        apply(&mut s, &add("Coupe", 30)).unwrap();
        apply(&mut s, &add("coupe", 40)).unwrap();
        assert!(s.event.glass_rental.required);
        assert_eq!(
            s.event.glass_rental.items,
            vec![GlassItem {
                kind: "Coupe".to_string(),
                quantity: 40
            }]
        );

        apply(
            &mut s,
            r#"{"name":"updateRentalItems","args":{"action":"reset","itemType":"glass"}}"#,
        )
        .unwrap();
        assert!(!s.event.glass_rental.required);
        assert!(s.event.glass_rental.items.is_empty());
    }

    #[test]
    fn bar_subtype_sets_size_or_color() {
        let mut s = session();
        let bar = |action: &str, subtype: &str| {
            format!(
                r#"{{"name":"updateRentalItems","args":{{"action":"{action}","itemType":"bar","subtype":"{subtype}"}}}}"#
            )
        };
        apply(&mut s, &bar("update", "8ft Mobile")).unwrap();
        apply(&mut s, &bar("update", "Gold Finish")).unwrap();
        assert!(s.event.bar_rental.required);
        assert_eq!(s.event.bar_rental.size.as_deref(), Some("8ft Mobile"));
        assert_eq!(s.event.bar_rental.color.as_deref(), Some("Gold Finish"));

        apply(&mut s, &bar("remove", "")).unwrap();
        assert!(!s.event.bar_rental.required);
    }

    #[test]
    fn add_recipe_then_generate_uses_it() {
        let mut s = session();
        apply(
            &mut s,
            r#"{"name":"addRecipe","args":{"name":"Paloma","ingredients":[
                {"name":"Grapefruit Soda","type":"soda","quantityPerDrink":4,"unit":"oz"}]}}"#,
        )
        .unwrap();
        assert_eq!(s.catalog.find("paloma").map(|r| r.id.as_str()), Some("paloma"));

        apply(
            &mut s,
            r#"{"name":"updateEventCocktails","args":{"action":"add","cocktailName":"paloma"}}"#,
        )
        .unwrap();
        let Outcome::PackingList(list) =
            apply(&mut s, r#"{"name":"generatePackingList","args":{}}"#).unwrap()
        else {
            panic!("expected a packing list");
        };
        let soda = list.find(IngredientCategory::Soda, "Grapefruit Soda").unwrap();
        assert_eq!(soda.containers_needed, 100);
    }

    #[test]
    fn add_recipe_rejects_blank_name() {
        let mut s = session();
        let err = apply(
            &mut s,
            r#"{"name":"addRecipe","args":{"name":"  ","ingredients":[]}}"#,
        );
        assert_eq!(err, Err(CommandError::EmptyRecipeName));
    }
}

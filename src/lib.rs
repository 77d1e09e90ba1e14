//! # Bar Packer
//!
//! Turns a booked cocktail event into a shopping and packing manifest.
//!
//! ## Features
//!
//! - Bar service (per-drink volume) and workshop (per-attendee kit) math
//! - Container rounding, plastic-cup substitution and backstop stock
//! - Recipe and booking sheet import (CSV)
//! - Assistant commands that edit an event before the next calculation
//! - Export to TSV and JSON
//!
//! ## Example
//!
//! ```
//! use bar_packer::engine::compute_packing_list;
//! use bar_packer::model::{Event, EventType, IngredientCategory, RecipeCatalog};
//!
//! let event = Event::new("evt-1", EventType::BarService, 25).with_selections(["The Butterfly"]);
//! let list = compute_packing_list(Some(&event), &RecipeCatalog::bundled());
//! let gin = list.find(IngredientCategory::Alcohol, "Gin").unwrap();
//! assert_eq!(gin.containers_needed, 2);
//! ```

pub mod commands;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;

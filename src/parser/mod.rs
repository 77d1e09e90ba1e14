pub mod events;
pub mod recipes;

pub use crate::error::ParseError;
pub use events::{load_event_json, parse_event_file, parse_event_sheet};
pub use recipes::{parse_recipe_file, parse_recipe_sheet};

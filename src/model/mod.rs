pub mod event;
pub mod ingredient;
pub mod packing;
pub mod recipe;

pub use event::{BarRental, Bartender, Event, EventStatus, EventType, GlassItem, GlassRental};
pub use ingredient::{Ingredient, IngredientCategory};
pub use packing::{PackingItem, PackingList, Summary};
pub use recipe::{CocktailRecipe, RecipeCatalog};

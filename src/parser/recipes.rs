use crate::error::ParseError;
use crate::model::{CocktailRecipe, Ingredient, IngredientCategory, RecipeCatalog};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Column layout of the recipe sheet (row 1 is a header)
const COL_NAME: usize = 0;
const COL_DESCRIPTION: usize = 1;
const COL_METHOD: usize = 2;
const COL_INGREDIENT: usize = 3;
const COL_TYPE: usize = 4;
const COL_QUANTITY: usize = 5;
const COL_UNIT: usize = 6;
const COL_CONTAINER: usize = 7;

const DEFAULT_UNIT: &str = "unit";

/// Parses a recipe sheet exported as CSV.
///
/// One ingredient per row. A blank name cell continues the recipe above it
/// (fill-down), inheriting its description and method. Recipes keep the
/// order in which they first appear.
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be opened.
/// Returns [`ParseError::Csv`] if the content is not readable CSV.
pub fn parse_recipe_file<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog, ParseError> {
    let file = File::open(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    parse_recipe_sheet(file)
}

pub fn parse_recipe_sheet<R: Read>(reader: R) -> Result<RecipeCatalog, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut recipes: Vec<CocktailRecipe> = Vec::new();
    let mut last_name = String::new();
    let mut last_description = String::new();
    let mut last_method = String::new();

    for record in csv_reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).map_or("", str::trim);

        let name = if cell(COL_NAME).is_empty() {
            if last_name.is_empty() {
                debug!("[RECIPES] Skipping row {:?} before any recipe name", record.position());
                continue;
            }
            last_name.clone()
        } else {
            last_name = cell(COL_NAME).to_string();
            last_description = cell(COL_DESCRIPTION).to_string();
            last_method = cell(COL_METHOD).to_string();
            last_name.clone()
        };

        let idx = match recipes.iter().position(|r| r.name == name) {
            Some(idx) => idx,
            None => {
                let description = non_empty_or(cell(COL_DESCRIPTION), &last_description);
                let method = non_empty_or(cell(COL_METHOD), &last_method);
                recipes.push(CocktailRecipe {
                    id: CocktailRecipe::slug(&name),
                    name: name.clone(),
                    description,
                    method,
                    ingredients: Vec::new(),
                });
                recipes.len() - 1
            }
        };

        let ingredient_name = cell(COL_INGREDIENT);
        if ingredient_name.is_empty() {
            continue;
        }

        let unit = match cell(COL_UNIT) {
            "" => DEFAULT_UNIT,
            unit => unit,
        };
        recipes[idx].ingredients.push(Ingredient {
            name: ingredient_name.to_string(),
            category: IngredientCategory::parse_lenient(cell(COL_TYPE)),
            quantity_per_drink: sheet_quantity(&name, ingredient_name, cell(COL_QUANTITY)),
            unit: unit.to_string(),
            container_size: parse_number(cell(COL_CONTAINER)).filter(|size| *size > 0.0),
        });
    }

    info!("[RECIPES] Loaded {} recipes from sheet", recipes.len());
    Ok(RecipeCatalog::new(recipes))
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Quantity per drink from a sheet cell. Unreadable cells count as 0 and
/// negative values are clamped to 0 so one bad row never reaches the engine.
fn sheet_quantity(recipe: &str, ingredient: &str, cell: &str) -> f64 {
    match parse_number(cell) {
        Some(qty) if qty < 0.0 => {
            warn!(
                "[RECIPES] Negative quantity {qty} for \"{ingredient}\" in \"{recipe}\"; using 0"
            );
            0.0
        }
        Some(qty) => qty,
        None => 0.0,
    }
}

/// Reads the leading number of a cell, so "26 oz" gives 26.
fn parse_number(cell: &str) -> Option<f64> {
    let end = cell
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(cell.len(), |(i, _)| i);
    cell[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

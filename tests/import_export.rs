use bar_packer::engine::compute_packing_list;
use bar_packer::export::write_tsv;
use bar_packer::model::{IngredientCategory, PackingList};
use bar_packer::parser::{parse_event_sheet, parse_recipe_sheet};
use pretty_assertions::assert_eq;

const RECIPES: &str = "\
Name,Description,Method,Ingredient,Type,Qty,Unit,Container
Spicy Margarita,Tequila and heat,Shake hard,Tequila,alcohol,2,oz,26
,,,Lime Juice,juice,1,oz,26
,,,Jalapeno,garnish,1,slice,
,,,Rocks,glass,1,glass,
";

const BOOKINGS: &str = "\
Client,Phone,Email,Date,Time,Location,Headcount,Cocktails,Type,Paid,Bartender,Bartender Email,Bar Rental,Bar Size,Bar Color,Glass Rental,Glass Types
Dana,555,d@x.com,2024-09-01,18:00-22:00,Loft,40,\"Spicy Margarita, Unknown Sour\",Bar Service,no,Sam,sam@x.com,no,,,no,
";

#[test]
fn sheets_flow_into_packing_list() {
    let catalog = parse_recipe_sheet(RECIPES.as_bytes()).unwrap();
    let event = parse_event_sheet(BOOKINGS.as_bytes()).unwrap().remove(0);

    let list = compute_packing_list(Some(&event), &catalog);

    assert_eq!(list.event_id, "evt-sheet-0");
    assert_eq!(list.summary.total_drinks, 80);
    let tequila = list.find(IngredientCategory::Alcohol, "Tequila").unwrap();
    assert_eq!(tequila.containers_needed, 4);
    let jalapeno = list.find(IngredientCategory::Garnish, "Jalapeno").unwrap();
    assert_eq!(jalapeno.containers_needed, 40);
    let cups = list.find(IngredientCategory::Glass, "Plastic Cup").unwrap();
    assert_eq!(cups.containers_needed, 48);
}

#[test]
fn tsv_export_lists_every_item() {
    let catalog = parse_recipe_sheet(RECIPES.as_bytes()).unwrap();
    let event = parse_event_sheet(BOOKINGS.as_bytes()).unwrap().remove(0);
    let list = compute_packing_list(Some(&event), &catalog);

    let mut out = Vec::new();
    write_tsv(&list, &event, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "EVENT: Dana\tPHONE: 555\tPAID: NO\tDATE: 2024-09-01");
    assert_eq!(lines[1], "");
    assert_eq!(lines.len(), list.total_items() + 3);
    assert!(lines.contains(&"ALCOHOL\tTequila\t4\tunits\t80\toz"));
    assert!(lines.contains(&"GLASS\tPlastic Cup\t48\tunits\t40\tglass"));
}

#[test]
fn json_round_trip_keeps_categories() {
    let catalog = parse_recipe_sheet(RECIPES.as_bytes()).unwrap();
    let event = parse_event_sheet(BOOKINGS.as_bytes()).unwrap().remove(0);
    let list = compute_packing_list(Some(&event), &catalog);

    let json = serde_json::to_string(&list).unwrap();
    let back: PackingList = serde_json::from_str(&json).unwrap();
    assert_eq!(back.categories, list.categories);
}

use crate::error::ExportError;
use crate::model::{Event, PackingList};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_tsv<P: AsRef<Path>>(
    list: &PackingList,
    event: &Event,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_tsv(list, event, file)
}

/// Writes the spreadsheet-paste layout: an event line, a blank line, then
/// one tab-separated row per item.
pub fn write_tsv<W: Write>(
    list: &PackingList,
    event: &Event,
    mut out: W,
) -> Result<(), ExportError> {
    writeln!(out, "{}\n", preamble(event)).map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(out);

    writer.write_record([
        "Category",
        "Item Name",
        "Units Needed",
        "Unit Type",
        "Total Quantity",
        "Measure",
    ])?;

    for (category, items) in &list.categories {
        let label = category.as_str().to_uppercase();
        for item in items {
            let unit_type = if item.containers_needed > 1 { "units" } else { "unit" };
            let quantity = (item.quantity_needed_oz * 10.0).round() / 10.0;
            writer.write_record([
                label.as_str(),
                item.name.as_str(),
                item.containers_needed.to_string().as_str(),
                unit_type,
                quantity.to_string().as_str(),
                item.unit.as_str(),
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

fn preamble(event: &Event) -> String {
    let phone = match event.client_phone.as_str() {
        "" => "N/A",
        phone => phone,
    };
    let paid = if event.is_paid { "YES" } else { "NO" };
    let date = event.event_date.split('T').next().unwrap_or_default();
    format!(
        "EVENT: {}\tPHONE: {phone}\tPAID: {paid}\tDATE: {date}",
        event.client_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, IngredientCategory, PackingItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_follow_category_order() {
        let mut list = PackingList::empty("evt");
        list.items_mut(IngredientCategory::Soda).push(PackingItem {
            name: "Sprite".to_string(),
            quantity_needed_oz: 0.0,
            containers_needed: 6,
            unit: "cans".to_string(),
            breakdown: String::new(),
        });
        list.items_mut(IngredientCategory::Alcohol).push(PackingItem {
            name: "Gin".to_string(),
            quantity_needed_oz: 18.75,
            containers_needed: 1,
            unit: "oz".to_string(),
            breakdown: String::new(),
        });

        let mut event = Event::new("evt", EventType::BarService, 10);
        event.client_name = "Dana".to_string();
        event.client_phone = "555".to_string();
        event.is_paid = true;
        event.event_date = "2024-09-01T18:00".to_string();

        let mut out = Vec::new();
        write_tsv(&list, &event, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "EVENT: Dana\tPHONE: 555\tPAID: YES\tDATE: 2024-09-01\n\n\
             Category\tItem Name\tUnits Needed\tUnit Type\tTotal Quantity\tMeasure\n\
             ALCOHOL\tGin\t1\tunit\t18.8\toz\n\
             SODA\tSprite\t6\tunits\t0\tcans\n"
        );
    }

    #[test]
    fn preamble_fills_missing_phone() {
        let mut event = Event::new("evt", EventType::Workshop, 8);
        event.client_name = "Ari".to_string();
        event.event_date = "2024-10-05".to_string();

        assert_eq!(
            preamble(&event),
            "EVENT: Ari\tPHONE: N/A\tPAID: NO\tDATE: 2024-10-05"
        );
    }
}

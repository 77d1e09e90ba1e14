use crate::error::ParseError;
use crate::model::{
    BarRental, Bartender, Event, EventStatus, EventType, GlassItem, GlassRental,
};
use chrono::Utc;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DEFAULT_START: &str = "18:00";
const DEFAULT_END: &str = "23:00";
const DEFAULT_BAR_SIZE: &str = "6ft Mobile";
const DEFAULT_BAR_COLOR: &str = "Standard";
const DEFAULT_GLASS_TYPE: &str = "Standard Mix";

/// Loads a single event from a JSON document.
pub fn load_event_json<P: AsRef<Path>>(path: P) -> Result<Event, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

pub fn parse_event_file<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, ParseError> {
    let file = File::open(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    parse_event_sheet(file)
}

/// Parses the booking sheet (one event per row after a header row).
///
/// Columns: client name, phone, email, date, time range, location,
/// headcount, cocktails (comma separated), type, paid, bartender,
/// bartender email, bar rental, bar size, bar color, glass rental,
/// glass types (comma separated).
pub fn parse_event_sheet<R: Read>(reader: R) -> Result<Vec<Event>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut events = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row: Vec<&str> = record.iter().map(str::trim).collect();
        events.push(event_from_row(index, &row));
    }

    info!("[EVENTS] Loaded {} events from sheet", events.len());
    Ok(events)
}

fn event_from_row(index: usize, row: &[&str]) -> Event {
    let cell = |idx: usize| row.get(idx).copied().unwrap_or("");
    let or_default = |idx: usize, fallback: &str| match cell(idx) {
        "" => fallback.to_string(),
        value => value.to_string(),
    };

    let date = match cell(3) {
        "" => Utc::now().format("%Y-%m-%d").to_string(),
        date => date.to_string(),
    };
    // A cell that already carries a time keeps it; the end falls back to the default
    let (event_date, end_time) = if let Some((day, _)) = date.split_once('T') {
        (date.clone(), format!("{day}T{DEFAULT_END}"))
    } else {
        let mut times = cell(4).split('-').map(str::trim);
        let start = times.next().filter(|t| !t.is_empty()).unwrap_or(DEFAULT_START);
        let end = times.next().filter(|t| !t.is_empty()).unwrap_or(DEFAULT_END);
        (format!("{date}T{}", with_minutes(start)), format!("{date}T{}", with_minutes(end)))
    };

    let bar_cell = cell(12).to_lowercase();
    let bar_required = bar_cell.contains("yes") || bar_cell.chars().count() > 3;
    let glass_required = cell(15).to_lowercase().contains("yes");

    let glass_items = if cell(16).is_empty() {
        if glass_required {
            vec![GlassItem {
                kind: DEFAULT_GLASS_TYPE.to_string(),
                quantity: 0,
            }]
        } else {
            Vec::new()
        }
    } else {
        split_list(cell(16))
            .into_iter()
            .map(|kind| GlassItem { kind, quantity: 0 })
            .collect()
    };

    let rental_detail = |idx: usize, fallback: &str| {
        let value = or_default(idx, if bar_required { fallback } else { "" });
        (!value.is_empty()).then_some(value)
    };

    Event {
        id: format!("evt-sheet-{index}"),
        event_type: if cell(8).to_lowercase().contains("workshop") {
            EventType::Workshop
        } else {
            EventType::BarService
        },
        headcount: leading_int(cell(6)),
        cocktail_selections: split_list(cell(7)),
        client_supplies_alcohol: false,
        bar_rental: BarRental {
            required: bar_required,
            size: rental_detail(13, DEFAULT_BAR_SIZE),
            color: rental_detail(14, DEFAULT_BAR_COLOR),
        },
        glass_rental: GlassRental {
            required: glass_required,
            items: glass_items,
        },
        client_name: or_default(0, "Unknown Client"),
        client_phone: cell(1).to_string(),
        is_paid: cell(9).to_lowercase().contains("yes"),
        event_date,
        end_time,
        location: or_default(5, "TBD"),
        status: EventStatus::Booked,
        bartender: Bartender {
            name: or_default(10, "TBD"),
            email: cell(11).to_string(),
        },
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn with_minutes(time: &str) -> String {
    if time.contains(':') {
        time.to_string()
    } else {
        format!("{time}:00")
    }
}

/// Leading digits of a cell as a headcount; anything unreadable is 0.
fn leading_int(cell: &str) -> u32 {
    let digits: String = cell.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "Client,Phone,Email,Date,Time,Location,Headcount,Cocktails,Type,Paid,\
Bartender,Bartender Email,Bar Rental,Bar Size,Bar Color,Glass Rental,Glass Types\n";

    #[test]
    fn maps_booking_row_to_event() {
        let sheet = format!(
            "{HEADER}Sarah,514-555-0123,s@x.com,2024-05-01,19 - 23:30,Old Port,25,\"The Butterfly, Mojito\",Bar Service,Yes,Alex,alex@x.com,yes,,Gold,yes,\"Lowball, Coupe\"\n"
        );
        let events = parse_event_sheet(sheet.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.id, "evt-sheet-0");
        assert_eq!(event.event_type, EventType::BarService);
        assert_eq!(event.headcount, 25);
        assert_eq!(event.cocktail_selections, vec!["The Butterfly", "Mojito"]);
        assert_eq!(event.event_date, "2024-05-01T19:00");
        assert_eq!(event.end_time, "2024-05-01T23:30");
        assert!(event.is_paid);
        assert_eq!(event.status, EventStatus::Booked);
        assert!(event.bar_rental.required);
        assert_eq!(event.bar_rental.size.as_deref(), Some(DEFAULT_BAR_SIZE));
        assert_eq!(event.bar_rental.color.as_deref(), Some("Gold"));
        assert!(event.glass_rental.required);
        let kinds: Vec<&str> = event.glass_rental.items.iter().map(|g| g.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Lowball", "Coupe"]);
    }

    #[test]
    fn date_cell_with_time_is_kept() {
        let sheet = format!("{HEADER}Lee,,,2024-07-04T20:15,21 - 22,,10,,Bar Service\n");
        let event = &parse_event_sheet(sheet.as_bytes()).unwrap()[0];
        assert_eq!(event.event_date, "2024-07-04T20:15");
        assert_eq!(event.end_time, "2024-07-04T23:00");
    }

    #[test]
    fn sparse_row_uses_defaults() {
        let sheet = format!("{HEADER}Jo,,,2024-06-02,,,abc,,Cocktail Workshop\n");
        let event = &parse_event_sheet(sheet.as_bytes()).unwrap()[0];
        assert_eq!(event.event_type, EventType::Workshop);
        assert_eq!(event.headcount, 0);
        assert!(event.cocktail_selections.is_empty());
        assert_eq!(event.location, "TBD");
        assert_eq!(event.bartender.name, "TBD");
        assert_eq!(event.event_date, "2024-06-02T18:00");
        assert!(!event.bar_rental.required);
        assert_eq!(event.bar_rental.size, None);
        assert!(!event.glass_rental.required);
        assert!(event.glass_rental.items.is_empty());
    }

    #[test]
    fn glass_rental_without_types_gets_standard_mix() {
        let sheet = format!("{HEADER}Jo,,,2024-06-02,,,10,,,,,,no,,,Yes\n");
        let event = &parse_event_sheet(sheet.as_bytes()).unwrap()[0];
        assert!(!event.bar_rental.required);
        assert_eq!(event.glass_rental.items[0].kind, DEFAULT_GLASS_TYPE);
    }
}

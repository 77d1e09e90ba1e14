use serde::{Deserialize, Serialize};

/// Selects the calculation strategy. Anything that isn't "Workshop" is bar service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EventType {
    #[default]
    #[serde(rename = "Bar Service")]
    BarService,
    #[serde(rename = "Workshop")]
    Workshop,
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        if value == "Workshop" {
            EventType::Workshop
        } else {
            EventType::BarService
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Inquiry,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    Booked,
    #[serde(rename = "Ready for Prep")]
    ReadyForPrep,
    Completed,
}

impl EventStatus {
    /// Parses a status label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "inquiry" => Some(EventStatus::Inquiry),
            "proposal sent" => Some(EventStatus::ProposalSent),
            "booked" => Some(EventStatus::Booked),
            "ready for prep" => Some(EventStatus::ReadyForPrep),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bartender {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarRental {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlassRental {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub items: Vec<GlassItem>,
}

/// A booked event as supplied by the event UI or a sheet import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub headcount: u32,
    #[serde(default)]
    pub cocktail_selections: Vec<String>,
    #[serde(default)]
    pub client_supplies_alcohol: bool,
    #[serde(default)]
    pub bar_rental: BarRental,
    #[serde(default)]
    pub glass_rental: GlassRental,

    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub bartender: Bartender,
}

impl Event {
    #[must_use]
    pub fn new(id: impl Into<String>, event_type: EventType, headcount: u32) -> Self {
        Self {
            id: id.into(),
            event_type,
            headcount,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_selections<I, S>(mut self, selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cocktail_selections = selections.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_selection(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.cocktail_selections
            .iter()
            .any(|s| s.to_lowercase() == name)
    }
}

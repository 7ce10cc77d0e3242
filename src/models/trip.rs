//! Trip request and recommendation result models

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::PackableItem;
use super::profile::Climate;

/// Season selected on the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Label shown next to the season choice
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring (Mild)",
            Season::Summer => "Summer (Hot)",
            Season::Fall => "Fall/Autumn (Cool)",
            Season::Winter => "Winter (Cold)",
        }
    }

    /// Parse a season code, accepting "autumn" for fall.
    /// Empty or unknown input means "unset".
    #[must_use]
    pub fn parse_optional(code: &str) -> Option<Season> {
        match code.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of a trip, consumed by the recommendation engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination profile name; empty or unmatched names contribute nothing
    #[serde(default)]
    pub destination: String,
    pub duration_days: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl TripRequest {
    #[must_use]
    pub fn new(destination: impl Into<String>, duration_days: u32) -> Self {
        Self {
            destination: destination.into(),
            duration_days,
            activities: Vec::new(),
            season: None,
        }
    }

    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.push(activity.into());
        self
    }
}

/// Which rule first put an item on the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum InclusionReason {
    Essential,
    Destination { name: String },
    Activity { name: String },
    Season { season: Season },
    Climate { climate: Climate },
}

/// A catalog item together with the quantity to pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedItem {
    #[serde(flatten)]
    pub item: PackableItem,
    pub quantity: u32,
    pub reason: InclusionReason,
}

impl RecommendedItem {
    /// Display name with the quantity appended when more than one is needed
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.quantity > 1 {
            format!("{} ({})", self.item.name, self.quantity)
        } else {
            self.item.name.clone()
        }
    }
}

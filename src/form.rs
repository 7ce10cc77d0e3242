//! Trip form: collects a trip description and validates it
//!
//! Validation is limited to presence and range checks. Destination and
//! activity names are not checked against the catalog here; unknown names
//! simply contribute nothing during recommendation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Catalog;
use crate::config::TripConfig;
use crate::models::{Climate, Season, TripRequest};
use crate::{PackwiseError, Result};

/// Trip description as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default, deserialize_with = "deserialize_season")]
    pub season: Option<Season>,
    #[serde(default)]
    pub selected_activities: Vec<String>,
}

fn default_duration() -> u32 {
    1
}

/// Accepts a season code, `null`, or an empty string for "no season"
fn deserialize_season<'de, D>(deserializer: D) -> std::result::Result<Option<Season>, D::Error>
where
    D: Deserializer<'de>,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    match code.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => Season::parse_optional(code)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown season '{code}'"))),
    }
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            duration: default_duration(),
            season: None,
            selected_activities: Vec::new(),
        }
    }
}

impl TripForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Set the duration from raw text input. Leading digits are read the way
    /// a browser number field does ("7abc" is 7); anything without a positive
    /// leading integer falls back to one day
    pub fn set_duration_input(&mut self, input: &str) {
        let trimmed = input.trim_start();
        let digits = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .unwrap_or_default();
        self.duration = digits
            .parse::<u32>()
            .ok()
            .filter(|&days| days > 0)
            .unwrap_or(1);
    }

    pub fn set_season(&mut self, season: Option<Season>) {
        self.season = season;
    }

    /// Check or uncheck an activity
    pub fn toggle_activity(&mut self, name: &str, checked: bool) {
        if checked {
            if !self.selected_activities.iter().any(|a| a == name) {
                self.selected_activities.push(name.to_string());
            }
        } else {
            self.selected_activities.retain(|a| a != name);
        }
    }

    /// Whether the submit action is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.destination.trim().is_empty() && self.duration >= 1
    }

    pub fn validate(&self, limits: &TripConfig) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(PackwiseError::validation("Destination is required"));
        }
        if self.duration < 1 {
            return Err(PackwiseError::validation("Trip must last at least one day"));
        }
        if self.duration > limits.max_duration_days {
            return Err(PackwiseError::validation(format!(
                "Trip duration cannot exceed {} days",
                limits.max_duration_days
            )));
        }
        Ok(())
    }

    /// Validate the form and produce the request handed to the engine
    pub fn submit(&self, limits: &TripConfig) -> Result<TripRequest> {
        self.validate(limits)?;
        Ok(TripRequest {
            destination: self.destination.trim().to_string(),
            duration_days: self.duration,
            activities: self.selected_activities.clone(),
            season: self.season,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationOption {
    pub name: String,
    pub climate: Climate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonOption {
    pub value: Season,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBounds {
    pub min: u32,
    pub max: u32,
}

/// Choices offered by the trip form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub destinations: Vec<DestinationOption>,
    pub activities: Vec<String>,
    pub seasons: Vec<SeasonOption>,
    pub duration: DurationBounds,
}

impl FormOptions {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, limits: &TripConfig) -> Self {
        Self {
            destinations: catalog
                .destinations()
                .iter()
                .map(|d| DestinationOption {
                    name: d.name.clone(),
                    climate: d.climate,
                })
                .collect(),
            activities: catalog.activities().iter().map(|a| a.name.clone()).collect(),
            seasons: Season::ALL
                .iter()
                .map(|&season| SeasonOption {
                    value: season,
                    label: season.label(),
                })
                .collect(),
            duration: DurationBounds {
                min: 1,
                max: limits.max_duration_days,
            },
        }
    }
}

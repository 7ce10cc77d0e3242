//! Reference catalog of packable items, destinations and activities
//!
//! The catalog is built once at startup, either from the bundled JSON
//! document or from an operator supplied file, and never changes afterwards.
//! Items are indexed by [`ItemId`] so rule evaluation never scans by key.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::models::{ActivityProfile, DestinationProfile, ItemId, ItemRef, PackableItem};
use crate::{PackwiseError, Result};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_str(include_str!("builtin_catalog.json"))
        .expect("bundled catalog must be valid")
});

/// Raw catalog document as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub items: Vec<PackableItem>,
    #[serde(default)]
    pub destinations: Vec<DestinationProfile>,
    #[serde(default)]
    pub activities: Vec<ActivityProfile>,
}

/// Profile entry that names no catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// "destination" or "activity"
    pub profile_kind: &'static str,
    pub profile: String,
    pub key: String,
}

/// Immutable, indexed catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<PackableItem>,
    index: HashMap<ItemId, usize>,
    destinations: Vec<DestinationProfile>,
    activities: Vec<ActivityProfile>,
    unresolved: Vec<UnresolvedReference>,
}

impl Catalog {
    /// The catalog bundled with the binary
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load the catalog selected by configuration
    pub fn load(config: &CatalogConfig) -> Result<Catalog> {
        let catalog = match &config.path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin().clone(),
        };

        if config.strict_references && !catalog.unresolved.is_empty() {
            let keys: Vec<String> = catalog
                .unresolved
                .iter()
                .map(|r| format!("{} ({} '{}')", r.key, r.profile_kind, r.profile))
                .collect();
            return Err(PackwiseError::catalog(format!(
                "unresolved item references: {}",
                keys.join(", ")
            )));
        }

        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded catalog from {} ({} items, {} destinations, {} activities)",
            path.display(),
            catalog.items.len(),
            catalog.destinations.len(),
            catalog.activities.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Catalog> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Index and check a raw catalog document
    pub fn from_data(data: CatalogData) -> Result<Catalog> {
        let mut index = HashMap::with_capacity(data.items.len());
        for (position, item) in data.items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(PackwiseError::catalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }

        let mut names = HashSet::new();
        for destination in &data.destinations {
            if !names.insert(destination.name.as_str()) {
                return Err(PackwiseError::catalog(format!(
                    "duplicate destination '{}'",
                    destination.name
                )));
            }
        }
        names.clear();
        for activity in &data.activities {
            if !names.insert(activity.name.as_str()) {
                return Err(PackwiseError::catalog(format!(
                    "duplicate activity '{}'",
                    activity.name
                )));
            }
        }

        let mut unresolved = Vec::new();
        let is_defined = |r: &ItemRef| r.known().is_some_and(|id| index.contains_key(&id));
        for destination in &data.destinations {
            for r in destination.recommended_items.iter().filter(|r| !is_defined(*r)) {
                unresolved.push(UnresolvedReference {
                    profile_kind: "destination",
                    profile: destination.name.clone(),
                    key: r.key().to_string(),
                });
            }
        }
        for activity in &data.activities {
            for r in activity.required_items.iter().filter(|r| !is_defined(*r)) {
                unresolved.push(UnresolvedReference {
                    profile_kind: "activity",
                    profile: activity.name.clone(),
                    key: r.key().to_string(),
                });
            }
        }

        for r in &unresolved {
            warn!(
                "{} '{}' references unknown item '{}'",
                r.profile_kind, r.profile, r.key
            );
        }

        Ok(Catalog {
            items: data.items,
            index,
            destinations: data.destinations,
            activities: data.activities,
            unresolved,
        })
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[PackableItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&PackableItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Resolve a profile reference, `None` for unresolved keys
    #[must_use]
    pub fn resolve(&self, item_ref: &ItemRef) -> Option<&PackableItem> {
        item_ref.known().and_then(|id| self.item(id))
    }

    pub fn essential_items(&self) -> impl Iterator<Item = &PackableItem> {
        self.items.iter().filter(|item| item.essential)
    }

    pub fn weather_dependent_items(&self) -> impl Iterator<Item = &PackableItem> {
        self.items.iter().filter(|item| item.weather_dependent)
    }

    #[must_use]
    pub fn destinations(&self) -> &[DestinationProfile] {
        &self.destinations
    }

    #[must_use]
    pub fn activities(&self) -> &[ActivityProfile] {
        &self.activities
    }

    /// Find a destination profile by its exact name
    #[must_use]
    pub fn destination(&self, name: &str) -> Option<&DestinationProfile> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// Find an activity profile by its exact name
    #[must_use]
    pub fn activity(&self, name: &str) -> Option<&ActivityProfile> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Profile references that did not resolve to a catalog item
    #[must_use]
    pub fn unresolved_references(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }
}

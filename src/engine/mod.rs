//! Packing list recommendation engine
//!
//! Turns a [`TripRequest`] into an ordered list of [`RecommendedItem`]s.
//! Items are collected in four passes (essentials, destination, activities,
//! weather), each skipping items an earlier pass already claimed, then given
//! quantities and sorted essentials first and by category name.
//!
//! The engine is a pure function over the catalog: unknown destinations,
//! unknown activities and a missing season simply contribute nothing.

pub mod quantity;
pub mod rules;

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::models::{InclusionReason, ItemId, PackableItem, RecommendedItem, TripRequest};

use quantity::{TripContext, quantity_for};

/// Recommendation engine bound to a catalog
#[derive(Debug, Clone, Copy)]
pub struct PackingEngine<'a> {
    catalog: &'a Catalog,
}

/// Items collected so far, in claim order
struct Selection<'a> {
    picked: Vec<(&'a PackableItem, InclusionReason)>,
    seen: HashSet<ItemId>,
}

impl<'a> Selection<'a> {
    fn new() -> Self {
        Self {
            picked: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn add(&mut self, item: &'a PackableItem, reason: impl FnOnce() -> InclusionReason) {
        if self.seen.insert(item.id) {
            self.picked.push((item, reason()));
        }
    }
}

impl<'a> PackingEngine<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Generate the packing list for a trip
    #[instrument(
        level = "debug",
        skip_all,
        fields(destination = %request.destination, duration = request.duration_days)
    )]
    #[must_use]
    pub fn generate(&self, request: &TripRequest) -> Vec<RecommendedItem> {
        let destination = self.catalog.destination(&request.destination);
        let mut selection = Selection::new();

        for item in self.catalog.essential_items() {
            selection.add(item, || InclusionReason::Essential);
        }

        if let Some(profile) = destination {
            for item in self.catalog.items().iter().filter(|i| profile.recommends(i.id)) {
                selection.add(item, || InclusionReason::Destination {
                    name: profile.name.clone(),
                });
            }
        } else if !request.destination.is_empty() {
            debug!("Destination '{}' not in catalog", request.destination);
        }

        for name in &request.activities {
            let Some(profile) = self.catalog.activity(name) else {
                debug!("Activity '{}' not in catalog", name);
                continue;
            };
            for item in profile
                .required_items
                .iter()
                .filter_map(|r| self.catalog.resolve(r))
            {
                selection.add(item, || InclusionReason::Activity {
                    name: profile.name.clone(),
                });
            }
        }

        let climate = destination.map(|d| d.climate);
        let by_season = rules::season_items(request.season);
        let by_climate = rules::climate_items(climate);
        for item in self.catalog.weather_dependent_items() {
            let reason = if by_season.contains(&item.id) {
                request.season.map(|season| InclusionReason::Season { season })
            } else if by_climate.contains(&item.id) {
                climate.map(|climate| InclusionReason::Climate { climate })
            } else {
                None
            };
            if let Some(reason) = reason {
                selection.add(item, || reason);
            }
        }

        let context = TripContext {
            duration_days: request.duration_days,
            season: request.season,
            climate,
        };
        let mut items: Vec<RecommendedItem> = selection
            .picked
            .into_iter()
            .map(|(item, reason)| RecommendedItem {
                item: item.clone(),
                quantity: quantity_for(item.id, &context),
                reason,
            })
            .collect();

        // Vec::sort_by is stable, ties keep claim order
        items.sort_by(|a, b| {
            b.item
                .essential
                .cmp(&a.item.essential)
                .then_with(|| a.item.category.as_str().cmp(b.item.category.as_str()))
        });

        debug!("Recommended {} items", items.len());
        items
    }
}

/// Generate a packing list against the bundled catalog
#[must_use]
pub fn generate(request: &TripRequest) -> Vec<RecommendedItem> {
    PackingEngine::new(Catalog::builtin()).generate(request)
}

//! Checklist view over a generated packing list
//!
//! Tracks which items have been packed for the current session only. The
//! checked state is never persisted and never fed back into the engine.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::{Category, ItemId, RecommendedItem, TripRequest};

const GENERAL_TIPS: [&str; 4] = [
    "Roll clothes instead of folding to save space",
    "Pack one extra day's worth of essentials in case of delays",
    "Keep important documents and medications in carry-on",
    "Check airline baggage restrictions before packing",
];
const LAUNDRY_TIP: &str = "For longer trips, consider doing laundry to pack lighter";
const LAUNDRY_TIP_AFTER_DAYS: u32 = 7;

/// Trip facts shown above the checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSummary {
    pub destination: String,
    pub duration_days: u32,
    pub activities: Vec<String>,
}

impl TripSummary {
    /// "1 day" or "N days"
    #[must_use]
    pub fn duration_label(&self) -> String {
        if self.duration_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.duration_days)
        }
    }
}

impl From<&TripRequest> for TripSummary {
    fn from(request: &TripRequest) -> Self {
        Self {
            destination: request.destination.clone(),
            duration_days: request.duration_days,
            activities: request.activities.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTag {
    Essential,
    Weather,
}

impl ItemTag {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ItemTag::Essential => "Essential",
            ItemTag::Weather => "Weather",
        }
    }
}

/// Badges rendered next to an item
#[must_use]
pub fn item_tags(item: &RecommendedItem) -> Vec<ItemTag> {
    let mut tags = Vec::new();
    if item.item.essential {
        tags.push(ItemTag::Essential);
    }
    if item.item.weather_dependent {
        tags.push(ItemTag::Weather);
    }
    tags
}

/// Items of one category, in list order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a RecommendedItem>,
    pub checked: usize,
}

#[derive(Debug, Clone)]
pub struct Checklist {
    summary: TripSummary,
    items: Vec<RecommendedItem>,
    checked: HashSet<ItemId>,
}

impl Checklist {
    #[must_use]
    pub fn new(summary: TripSummary, items: Vec<RecommendedItem>) -> Self {
        Self {
            summary,
            items,
            checked: HashSet::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> &TripSummary {
        &self.summary
    }

    #[must_use]
    pub fn items(&self) -> &[RecommendedItem] {
        &self.items
    }

    fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|r| r.item.id == id)
    }

    /// Mark an item packed or unpacked. Items not on the list are ignored.
    pub fn set_checked(&mut self, id: ItemId, checked: bool) {
        if checked {
            if self.contains(id) {
                self.checked.insert(id);
            }
        } else {
            self.checked.remove(&id);
        }
    }

    pub fn toggle(&mut self, id: ItemId) {
        let checked = self.is_checked(id);
        self.set_checked(id, !checked);
    }

    #[must_use]
    pub fn is_checked(&self, id: ItemId) -> bool {
        self.checked.contains(&id)
    }

    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Share of packed items, rounded to a whole percent; 0 for an empty list
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        let total = self.total_count();
        if total == 0 {
            return 0;
        }
        let ratio = self.packed_count() as f64 / total as f64;
        (ratio * 100.0).round() as u8
    }

    /// Items grouped by category, groups in order of first appearance
    #[must_use]
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for recommended in &self.items {
            let checked = usize::from(self.is_checked(recommended.item.id));
            match groups
                .iter_mut()
                .find(|g| g.category == recommended.item.category)
            {
                Some(group) => {
                    group.items.push(recommended);
                    group.checked += checked;
                }
                None => groups.push(CategoryGroup {
                    category: recommended.item.category,
                    items: vec![recommended],
                    checked,
                }),
            }
        }
        groups
    }

    #[must_use]
    pub fn tips(&self) -> Vec<&'static str> {
        let mut tips = GENERAL_TIPS.to_vec();
        if self.summary.duration_days > LAUNDRY_TIP_AFTER_DAYS {
            tips.push(LAUNDRY_TIP);
        }
        tips
    }

    /// Plain-text rendering used by the print action
    #[must_use]
    pub fn render_printable(&self) -> String {
        self.to_string()
    }

    /// Serializable view of the whole checklist
    #[must_use]
    pub fn snapshot(&self) -> ChecklistSnapshot {
        ChecklistSnapshot {
            trip: self.summary.clone(),
            items: self
                .items
                .iter()
                .map(|r| ChecklistEntry {
                    item: r.clone(),
                    tags: item_tags(r),
                    checked: self.is_checked(r.item.id),
                })
                .collect(),
            groups: self
                .groups()
                .into_iter()
                .map(|g| GroupSnapshot {
                    category: g.category,
                    items: g.items.iter().map(|r| r.item.id).collect(),
                    checked: g.checked,
                    total: g.items.len(),
                })
                .collect(),
            packed: self.packed_count(),
            total: self.total_count(),
            completion_percentage: self.completion_percentage(),
            tips: self.tips(),
        }
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;

        writeln!(f, "Your Personalized Packing List")?;
        write!(f, "{} | {}", summary.destination, summary.duration_label())?;
        if !summary.activities.is_empty() {
            write!(f, " | {}", summary.activities.join(", "))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}/{} items ({}%)",
            self.packed_count(),
            self.total_count(),
            self.completion_percentage()
        )?;

        for group in self.groups() {
            writeln!(
                f,
                "\n{} ({}/{})",
                group.category.title(),
                group.checked,
                group.items.len()
            )?;
            for recommended in group.items {
                let mark = if self.is_checked(recommended.item.id) { 'x' } else { ' ' };
                write!(f, "  [{mark}] {}", recommended.display_name())?;
                for tag in item_tags(recommended) {
                    write!(f, "  [{}]", tag.label())?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "\nPacking Tips")?;
        for tip in self.tips() {
            writeln!(f, "  - {tip}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntry {
    #[serde(flatten)]
    pub item: RecommendedItem,
    pub tags: Vec<ItemTag>,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSnapshot {
    pub category: Category,
    pub items: Vec<ItemId>,
    pub checked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistSnapshot {
    pub trip: TripSummary,
    pub items: Vec<ChecklistEntry>,
    pub groups: Vec<GroupSnapshot>,
    pub packed: usize,
    pub total: usize,
    pub completion_percentage: u8,
    pub tips: Vec<&'static str>,
}

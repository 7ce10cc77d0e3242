//! Duration-based quantity rules
//!
//! Quantities default to one. The table below lists the items whose count
//! scales with trip length, each with an upper bound.

use crate::models::{Climate, ItemId, Season};

/// How a quantity is derived from the trip duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// `min(duration + extra, cap)`
    DurationPlus { extra: u32, cap: u32 },
    /// `min(ceil(duration / days), cap)`
    EveryDays { days: u32, cap: u32 },
}

impl Formula {
    #[must_use]
    pub fn evaluate(self, duration_days: u32) -> u32 {
        let quantity = match self {
            Formula::DurationPlus { extra, cap } => duration_days.saturating_add(extra).min(cap),
            Formula::EveryDays { days, cap } => duration_days.div_ceil(days.max(1)).min(cap),
        };
        quantity.max(1)
    }
}

/// When a quantity rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Summer season or a tropical destination
    WarmTrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityRule {
    pub item: ItemId,
    pub formula: Formula,
    pub applies_when: Condition,
}

pub const QUANTITY_RULES: &[QuantityRule] = &[
    QuantityRule {
        item: ItemId::Underwear,
        formula: Formula::DurationPlus { extra: 1, cap: 10 },
        applies_when: Condition::Always,
    },
    QuantityRule {
        item: ItemId::Socks,
        formula: Formula::DurationPlus { extra: 1, cap: 10 },
        applies_when: Condition::Always,
    },
    QuantityRule {
        item: ItemId::Tshirts,
        formula: Formula::EveryDays { days: 2, cap: 7 },
        applies_when: Condition::Always,
    },
    QuantityRule {
        item: ItemId::Pants,
        formula: Formula::EveryDays { days: 3, cap: 4 },
        applies_when: Condition::Always,
    },
    QuantityRule {
        item: ItemId::Shorts,
        formula: Formula::EveryDays { days: 2, cap: 5 },
        applies_when: Condition::WarmTrip,
    },
];

/// Trip facts the quantity rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripContext {
    pub duration_days: u32,
    pub season: Option<Season>,
    /// Climate of the matched destination, if any
    pub climate: Option<Climate>,
}

impl TripContext {
    fn satisfies(&self, condition: Condition) -> bool {
        match condition {
            Condition::Always => true,
            Condition::WarmTrip => {
                self.season == Some(Season::Summer) || self.climate == Some(Climate::Tropical)
            }
        }
    }
}

/// Quantity to pack for an item on the given trip
#[must_use]
pub fn quantity_for(item: ItemId, context: &TripContext) -> u32 {
    QUANTITY_RULES
        .iter()
        .find(|rule| rule.item == item)
        .filter(|rule| context.satisfies(rule.applies_when))
        .map_or(1, |rule| rule.formula.evaluate(context.duration_days))
}

//! Weather rule tables
//!
//! A weather-dependent item is packed when its id appears in the table for
//! the trip's season or in the table for the destination's climate.

use crate::models::{Climate, ItemId, Season};

const WINTER: &[ItemId] = &[
    ItemId::Jacket,
    ItemId::Sweater,
    ItemId::WinterCoat,
    ItemId::ThermalUnderwear,
    ItemId::RainJacket,
];
const SUMMER: &[ItemId] = &[ItemId::Shorts, ItemId::Sunscreen, ItemId::Sunglasses, ItemId::Hat];
const SHOULDER: &[ItemId] = &[
    ItemId::Jacket,
    ItemId::RainJacket,
    ItemId::Sunscreen,
    ItemId::Sunglasses,
];

const TROPICAL: &[ItemId] = &[ItemId::Shorts, ItemId::Sunscreen, ItemId::Sunglasses, ItemId::Hat];
const COLD: &[ItemId] = &[
    ItemId::Jacket,
    ItemId::Sweater,
    ItemId::WinterCoat,
    ItemId::ThermalUnderwear,
];
const DESERT: &[ItemId] = &[ItemId::Sunscreen, ItemId::Sunglasses, ItemId::Hat];

/// Items the season calls for; empty when no season was chosen
#[must_use]
pub fn season_items(season: Option<Season>) -> &'static [ItemId] {
    match season {
        Some(Season::Winter) => WINTER,
        Some(Season::Summer) => SUMMER,
        Some(Season::Spring | Season::Fall) => SHOULDER,
        None => &[],
    }
}

/// Items the destination climate calls for
#[must_use]
pub fn climate_items(climate: Option<Climate>) -> &'static [ItemId] {
    match climate {
        Some(Climate::Tropical) => TROPICAL,
        Some(Climate::Cold) => COLD,
        Some(Climate::Desert) => DESERT,
        Some(Climate::Temperate | Climate::Varied) | None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(Season::Winter), ItemId::RainJacket, true)]
    #[case(Some(Season::Winter), ItemId::Shorts, false)]
    #[case(Some(Season::Summer), ItemId::Hat, true)]
    #[case(Some(Season::Summer), ItemId::Jacket, false)]
    #[case(Some(Season::Spring), ItemId::RainJacket, true)]
    #[case(Some(Season::Fall), ItemId::Sunscreen, true)]
    #[case(Some(Season::Fall), ItemId::Hat, false)]
    #[case(None, ItemId::Jacket, false)]
    fn test_season_table(#[case] season: Option<Season>, #[case] id: ItemId, #[case] expected: bool) {
        assert_eq!(season_items(season).contains(&id), expected);
    }

    #[rstest]
    #[case(Some(Climate::Tropical), ItemId::Shorts, true)]
    #[case(Some(Climate::Cold), ItemId::Sweater, true)]
    #[case(Some(Climate::Cold), ItemId::RainJacket, false)]
    #[case(Some(Climate::Desert), ItemId::Hat, true)]
    #[case(Some(Climate::Desert), ItemId::Shorts, false)]
    #[case(Some(Climate::Temperate), ItemId::Jacket, false)]
    #[case(Some(Climate::Varied), ItemId::Sunscreen, false)]
    #[case(None, ItemId::Sunscreen, false)]
    fn test_climate_table(#[case] climate: Option<Climate>, #[case] id: ItemId, #[case] expected: bool) {
        assert_eq!(climate_items(climate).contains(&id), expected);
    }
}

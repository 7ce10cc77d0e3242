//! Packable item model and its stable identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of every item the catalog can define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    // Clothing
    Underwear,
    Socks,
    Tshirts,
    Pants,
    Jacket,
    Sweater,
    Shorts,
    Dress,
    FormalWear,
    Swimwear,
    RainJacket,
    WinterCoat,
    ThermalUnderwear,
    Pajamas,
    // Toiletries
    Toothbrush,
    Toothpaste,
    Shampoo,
    Soap,
    Deodorant,
    Sunscreen,
    Moisturizer,
    Razor,
    Medications,
    // Electronics
    PhoneCharger,
    Camera,
    Laptop,
    Tablet,
    PowerBank,
    Adapter,
    // Documents
    Passport,
    Tickets,
    Insurance,
    IdCard,
    Visa,
    // Accessories
    Sunglasses,
    Hat,
    Watch,
    Jewelry,
    Wallet,
    // Outdoor
    HikingBoots,
    Backpack,
    WaterBottle,
    FirstAid,
    // Work
    BusinessCards,
    Notebook,
}

impl ItemId {
    pub const ALL: [ItemId; 45] = [
        ItemId::Underwear,
        ItemId::Socks,
        ItemId::Tshirts,
        ItemId::Pants,
        ItemId::Jacket,
        ItemId::Sweater,
        ItemId::Shorts,
        ItemId::Dress,
        ItemId::FormalWear,
        ItemId::Swimwear,
        ItemId::RainJacket,
        ItemId::WinterCoat,
        ItemId::ThermalUnderwear,
        ItemId::Pajamas,
        ItemId::Toothbrush,
        ItemId::Toothpaste,
        ItemId::Shampoo,
        ItemId::Soap,
        ItemId::Deodorant,
        ItemId::Sunscreen,
        ItemId::Moisturizer,
        ItemId::Razor,
        ItemId::Medications,
        ItemId::PhoneCharger,
        ItemId::Camera,
        ItemId::Laptop,
        ItemId::Tablet,
        ItemId::PowerBank,
        ItemId::Adapter,
        ItemId::Passport,
        ItemId::Tickets,
        ItemId::Insurance,
        ItemId::IdCard,
        ItemId::Visa,
        ItemId::Sunglasses,
        ItemId::Hat,
        ItemId::Watch,
        ItemId::Jewelry,
        ItemId::Wallet,
        ItemId::HikingBoots,
        ItemId::Backpack,
        ItemId::WaterBottle,
        ItemId::FirstAid,
        ItemId::BusinessCards,
        ItemId::Notebook,
    ];

    /// Catalog key for this identifier (e.g. `"thermal_underwear"`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::Underwear => "underwear",
            ItemId::Socks => "socks",
            ItemId::Tshirts => "tshirts",
            ItemId::Pants => "pants",
            ItemId::Jacket => "jacket",
            ItemId::Sweater => "sweater",
            ItemId::Shorts => "shorts",
            ItemId::Dress => "dress",
            ItemId::FormalWear => "formal_wear",
            ItemId::Swimwear => "swimwear",
            ItemId::RainJacket => "rain_jacket",
            ItemId::WinterCoat => "winter_coat",
            ItemId::ThermalUnderwear => "thermal_underwear",
            ItemId::Pajamas => "pajamas",
            ItemId::Toothbrush => "toothbrush",
            ItemId::Toothpaste => "toothpaste",
            ItemId::Shampoo => "shampoo",
            ItemId::Soap => "soap",
            ItemId::Deodorant => "deodorant",
            ItemId::Sunscreen => "sunscreen",
            ItemId::Moisturizer => "moisturizer",
            ItemId::Razor => "razor",
            ItemId::Medications => "medications",
            ItemId::PhoneCharger => "phone_charger",
            ItemId::Camera => "camera",
            ItemId::Laptop => "laptop",
            ItemId::Tablet => "tablet",
            ItemId::PowerBank => "power_bank",
            ItemId::Adapter => "adapter",
            ItemId::Passport => "passport",
            ItemId::Tickets => "tickets",
            ItemId::Insurance => "insurance",
            ItemId::IdCard => "id_card",
            ItemId::Visa => "visa",
            ItemId::Sunglasses => "sunglasses",
            ItemId::Hat => "hat",
            ItemId::Watch => "watch",
            ItemId::Jewelry => "jewelry",
            ItemId::Wallet => "wallet",
            ItemId::HikingBoots => "hiking_boots",
            ItemId::Backpack => "backpack",
            ItemId::WaterBottle => "water_bottle",
            ItemId::FirstAid => "first_aid",
            ItemId::BusinessCards => "business_cards",
            ItemId::Notebook => "notebook",
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog key that names no known item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item key '{0}'")]
pub struct UnknownItemId(pub String);

impl FromStr for ItemId {
    type Err = UnknownItemId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownItemId(s.to_string()))
    }
}

/// Item category, displayed as a checklist section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Toiletries,
    Electronics,
    Documents,
    Accessories,
    Outdoor,
    Sports,
    Work,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Toiletries => "toiletries",
            Category::Electronics => "electronics",
            Category::Documents => "documents",
            Category::Accessories => "accessories",
            Category::Outdoor => "outdoor",
            Category::Sports => "sports",
            Category::Work => "work",
        }
    }

    /// Section heading used in printed checklists
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Toiletries => "Toiletries",
            Category::Electronics => "Electronics",
            Category::Documents => "Documents",
            Category::Accessories => "Accessories",
            Category::Outdoor => "Outdoor",
            Category::Sports => "Sports",
            Category::Work => "Work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single item that can end up on a packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackableItem {
    pub id: ItemId,
    /// Display name (e.g. "Pants/Trousers")
    pub name: String,
    pub category: Category,
    /// Included on every list regardless of the trip
    pub essential: bool,
    /// Included depending on season or destination climate
    #[serde(default)]
    pub weather_dependent: bool,
    /// Activities this item is typically used for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activity_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_round_trips_through_key() {
        for id in ItemId::ALL {
            assert_eq!(id.as_str().parse::<ItemId>(), Ok(id));
        }
    }

    #[test]
    fn test_item_id_serde_matches_key() {
        let json = serde_json::to_string(&ItemId::ThermalUnderwear).unwrap();
        assert_eq!(json, "\"thermal_underwear\"");
        let id: ItemId = serde_json::from_str("\"id_card\"").unwrap();
        assert_eq!(id, ItemId::IdCard);
    }

    #[test]
    fn test_unknown_item_key() {
        let err = "comfortable_shoes".parse::<ItemId>().unwrap_err();
        assert_eq!(err, UnknownItemId("comfortable_shoes".to_string()));
        assert!(err.to_string().contains("comfortable_shoes"));
    }

    #[test]
    fn test_category_names_are_lowercase() {
        assert_eq!(Category::Toiletries.as_str(), "toiletries");
        assert_eq!(
            serde_json::to_string(&Category::Electronics).unwrap(),
            "\"electronics\""
        );
    }
}

//! Destination and activity profiles

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::ItemId;

/// Climate category of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Tropical,
    Temperate,
    Cold,
    Desert,
    Varied,
}

impl Climate {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Climate::Tropical => "tropical",
            Climate::Temperate => "temperate",
            Climate::Cold => "cold",
            Climate::Desert => "desert",
            Climate::Varied => "varied",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference from a profile to a catalog item.
///
/// Profiles are authored as plain keys; a key that names no known item is
/// kept as `Unresolved` so it can be reported instead of vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemRef {
    Known(ItemId),
    Unresolved(String),
}

impl ItemRef {
    #[must_use]
    pub fn known(&self) -> Option<ItemId> {
        match self {
            ItemRef::Known(id) => Some(*id),
            ItemRef::Unresolved(_) => None,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            ItemRef::Known(id) => id.as_str(),
            ItemRef::Unresolved(key) => key,
        }
    }
}

impl From<String> for ItemRef {
    fn from(key: String) -> Self {
        match key.parse::<ItemId>() {
            Ok(id) => ItemRef::Known(id),
            Err(_) => ItemRef::Unresolved(key),
        }
    }
}

impl From<ItemRef> for String {
    fn from(item_ref: ItemRef) -> Self {
        item_ref.key().to_string()
    }
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Known(id)
    }
}

/// Destination type offered on the trip form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationProfile {
    pub name: String,
    pub climate: Climate,
    pub recommended_items: Vec<ItemRef>,
}

impl DestinationProfile {
    /// Whether the profile recommends the given item
    #[must_use]
    pub fn recommends(&self, id: ItemId) -> bool {
        self.recommended_items.iter().any(|r| r.known() == Some(id))
    }
}

/// Planned activity offered on the trip form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub name: String,
    pub required_items: Vec<ItemRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ref_resolves_known_keys() {
        let r = ItemRef::from("swimwear".to_string());
        assert_eq!(r, ItemRef::Known(ItemId::Swimwear));
        assert_eq!(r.known(), Some(ItemId::Swimwear));
    }

    #[test]
    fn test_item_ref_keeps_unknown_keys() {
        let r: ItemRef = serde_json::from_str("\"warm_boots\"").unwrap();
        assert_eq!(r, ItemRef::Unresolved("warm_boots".to_string()));
        assert_eq!(r.known(), None);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"warm_boots\"");
    }

    #[test]
    fn test_destination_recommends_only_known_items() {
        let profile = DestinationProfile {
            name: "Desert".to_string(),
            climate: Climate::Desert,
            recommended_items: vec![
                ItemRef::Known(ItemId::Hat),
                ItemRef::Unresolved("light_jacket".to_string()),
            ],
        };
        assert!(profile.recommends(ItemId::Hat));
        assert!(!profile.recommends(ItemId::Jacket));
    }
}

//! Item Entity
//!
//! A single packing list entry.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Smallest quantity the add form offers
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity the add form offers
pub const MAX_QUANTITY: u32 = 20;

/// Values shown in the quantity selector
pub fn quantity_options() -> RangeInclusive<u32> {
    MIN_QUANTITY..=MAX_QUANTITY
}

/// Unique item identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packing list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to pack
    pub description: String,
    /// How many of it
    pub quantity: u32,
    /// Whether it is already in the bag
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item. A zero quantity is raised to the minimum.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity: quantity.max(MIN_QUANTITY),
            packed: false,
        }
    }

    /// Row text, e.g. "2 Passports"
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }

    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new(ItemId(7), "Socks", 3);
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.description, "Socks");
        assert_eq!(item.quantity, 3);
        assert!(!item.packed);
    }

    #[test]
    fn test_zero_quantity_raised_to_minimum() {
        let item = Item::new(ItemId(1), "Charger", 0);
        assert_eq!(item.quantity, MIN_QUANTITY);
    }

    #[test]
    fn test_toggled_only_flips_packed() {
        let item = Item::new(ItemId(1), "Charger", 2);
        let flipped = item.toggled();
        assert!(flipped.packed);
        assert_eq!(flipped.id, item.id);
        assert_eq!(flipped.description, item.description);
        assert_eq!(flipped.quantity, item.quantity);
        assert_eq!(flipped.toggled(), item);
    }

    #[test]
    fn test_label() {
        assert_eq!(Item::new(ItemId(1), "Passports", 2).label(), "2 Passports");
    }

    #[test]
    fn test_quantity_options() {
        let options: Vec<u32> = quantity_options().collect();
        assert_eq!(options.len(), 20);
        assert_eq!(options.first(), Some(&1));
        assert_eq!(options.last(), Some(&20));
    }

    #[test]
    fn test_id_serializes_as_number() {
        let item = Item::new(ItemId(1700000000000), "Hat", 1);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"description":"Hat","quantity":1,"packed":false}"#
        );
    }
}

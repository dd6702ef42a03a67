//! Item List
//!
//! The canonical, insertion-ordered list of items. Every transition returns
//! a new list and leaves `self` untouched; none of them can fail.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

/// Ordered items, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the end. An item whose id is already present is ignored.
    pub fn add(&self, item: Item) -> Self {
        if self.contains(item.id) {
            log::warn!("[LIST] Ignoring duplicate item id {}", item.id);
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Drop the item with `id`; unchanged if absent
    pub fn remove(&self, id: ItemId) -> Self {
        Self {
            items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
        }
    }

    /// Flip `packed` on the item with `id`; unchanged if absent
    pub fn toggle(&self, id: ItemId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| if item.id == id { item.toggled() } else { item.clone() })
                .collect(),
        }
    }

    /// Empty list. Confirmation is the caller's business.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of packed items
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.packed).count()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for ItemList {
    /// Collect items in order, keeping the first occurrence of each id
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |list, item| list.add(item))
    }
}

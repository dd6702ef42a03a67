//! Display Ordering
//!
//! Read-only projections of an [`ItemList`] in the order the user picked.
//! The canonical list is never reordered.

use std::fmt;
use std::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::Collator;

use crate::item::Item;
use crate::list::ItemList;

/// Display order selected in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Insertion order
    #[default]
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked first
    Packed,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Packed];

    /// Value used in the sort selector
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Packed => "packed",
        }
    }

    /// Caption shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Input => "Sort by input order",
            SortKey::Description => "Sort by description",
            SortKey::Packed => "Sort by packed status",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortKey::Input),
            "description" => Ok(SortKey::Description),
            "packed" => Ok(SortKey::Packed),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Sort descriptions with the root-locale collator (tertiary strength):
/// accents sort next to their base letter and lowercase precedes uppercase.
fn sort_by_description(view: &mut [&Item]) {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => view.sort_by(|a, b| collator.compare(&a.description, &b.description)),
        Err(e) => {
            log::warn!("[LIST] Collator unavailable, sorting by code point: {}", e);
            view.sort_by(|a, b| a.description.cmp(&b.description));
        }
    }
}

/// Items of `list` in display order for `key`. Equal keys keep input order.
pub fn sorted(list: &ItemList, key: SortKey) -> Vec<&Item> {
    let mut view: Vec<&Item> = list.iter().collect();
    match key {
        SortKey::Input => {}
        SortKey::Description => sort_by_description(&mut view),
        SortKey::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

/// Owned variant of [`sorted`], for views that need `'static` rows
pub fn sorted_items(list: &ItemList, key: SortKey) -> Vec<Item> {
    sorted(list, key).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn list_of(entries: &[(u64, &str, bool)]) -> ItemList {
        entries
            .iter()
            .map(|(id, description, packed)| Item {
                id: ItemId(*id),
                description: description.to_string(),
                quantity: 1,
                packed: *packed,
            })
            .collect()
    }

    fn ids(view: &[&Item]) -> Vec<u64> {
        view.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn test_input_is_canonical_order() {
        let list = list_of(&[(3, "c", true), (1, "a", false), (2, "b", true)]);
        assert_eq!(ids(&sorted(&list, SortKey::Input)), vec![3, 1, 2]);
    }

    #[test]
    fn test_description_ascending() {
        let list = list_of(&[(1, "Socks", false), (2, "Charger", false), (3, "Passports", false)]);
        assert_eq!(ids(&sorted(&list, SortKey::Description)), vec![2, 3, 1]);
    }

    #[test]
    fn test_description_ignores_case() {
        let list = list_of(&[(1, "banana", false), (2, "Apple", false), (3, "cherry", false)]);
        assert_eq!(ids(&sorted(&list, SortKey::Description)), vec![2, 1, 3]);
    }

    #[test]
    fn test_description_collates_accents_and_case() {
        let list = list_of(&[
            (1, "zebra", false),
            (2, "éclair", false),
            (3, "Apple", false),
            (4, "apple", false),
        ]);
        let order: Vec<&str> = sorted(&list, SortKey::Description)
            .iter()
            .map(|item| item.description.as_str())
            .collect();
        assert_eq!(order, vec!["apple", "Apple", "éclair", "zebra"]);
    }

    #[test]
    fn test_description_stable_for_equal_text() {
        let list = list_of(&[(1, "Socks", false), (2, "Hat", false), (3, "Socks", true)]);
        assert_eq!(ids(&sorted(&list, SortKey::Description)), vec![2, 1, 3]);
    }

    #[test]
    fn test_packed_unpacked_first_and_stable() {
        let list = list_of(&[
            (1, "a", true),
            (2, "b", false),
            (3, "c", true),
            (4, "d", false),
        ]);
        assert_eq!(ids(&sorted(&list, SortKey::Packed)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_keeps_items_and_canonical_list() {
        let list = list_of(&[(1, "b", true), (2, "a", false), (3, "c", false)]);
        let before = list.clone();
        for key in SortKey::ALL {
            let mut view = ids(&sorted(&list, key));
            assert_eq!(view.len(), list.len());
            view.sort();
            assert_eq!(view, vec![1, 2, 3]);
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("size".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Input);
    }
}

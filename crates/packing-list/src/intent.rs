//! Intents
//!
//! Views never touch the list directly. They raise an [`Intent`] and the
//! owner of the list applies it.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};
use crate::list::ItemList;

/// Prompt shown before the whole list is cleared
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// A requested change to the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Intent {
    Add(Item),
    Delete(ItemId),
    Toggle(ItemId),
    /// Only raise this after the user confirmed, see [`request_clear`]
    Clear,
}

impl ItemList {
    /// Apply one intent, returning the new list
    pub fn apply(&self, intent: Intent) -> ItemList {
        match intent {
            Intent::Add(item) => self.add(item),
            Intent::Delete(id) => self.remove(id),
            Intent::Toggle(id) => self.toggle(id),
            Intent::Clear => self.clear(),
        }
    }
}

/// Blocking yes/no question to the user
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Ask for confirmation once and yield [`Intent::Clear`] only if granted
pub fn request_clear(list: &ItemList, confirm: &impl Confirm) -> Option<Intent> {
    log::debug!("[LIST] Clear requested with {} items", list.len());
    if confirm.confirm(CLEAR_PROMPT) {
        Some(Intent::Clear)
    } else {
        None
    }
}

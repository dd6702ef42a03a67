//! Packing List Domain
//!
//! Pure state model behind the Far Away packing list:
//! - item: entries and their identifiers
//! - list: the canonical ordered list and its transitions
//! - sort / stats: read-only projections for the list view and footer
//! - form: pending input of the add form
//! - intent: intents raised by views and the clear confirmation boundary

mod ids;
mod item;
mod list;
mod sort;
mod stats;
mod form;
mod intent;


pub use ids::IdGenerator;
pub use item::{quantity_options, Item, ItemId, MAX_QUANTITY, MIN_QUANTITY};
pub use list::ItemList;
pub use sort::{sorted, sorted_items, SortKey};
pub use stats::{percentage, Summary};
pub use form::AddForm;
pub use intent::{request_clear, Confirm, Intent, CLEAR_PROMPT};

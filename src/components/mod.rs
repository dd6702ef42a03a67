//! UI Components
//!
//! Leptos view functions. None of them own list state; they read the store
//! and report intents upward.

mod logo;
mod add_item_form;
mod packing_list;
mod item_row;
mod sort_selector;
mod stats_footer;
mod log_panel;

pub use logo::Logo;
pub use add_item_form::AddItemForm;
pub use packing_list::PackingList;
pub use item_row::ItemRow;
pub use sort_selector::SortSelector;
pub use stats_footer::StatsFooter;
pub use log_panel::LogPanel;

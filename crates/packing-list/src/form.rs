//! Add Form State
//!
//! Pending description and quantity before an item is created.

use crate::ids::IdGenerator;
use crate::item::{Item, MAX_QUANTITY, MIN_QUANTITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    description: String,
    quantity: u32,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: MIN_QUANTITY,
        }
    }
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the quantity, clamped to the selector range
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
    }

    /// Set the quantity from a selector value such as "3"
    pub fn set_quantity_str(&mut self, value: &str) -> Result<(), String> {
        let quantity = value
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid quantity {:?}: {}", value, e))?;
        self.set_quantity(quantity);
        Ok(())
    }

    /// Build an item from the pending input and reset the form.
    ///
    /// Returns `None` and leaves the form as it is when the description is empty.
    pub fn submit(&mut self, ids: &mut IdGenerator, now_ms: u64) -> Option<Item> {
        if self.description.is_empty() {
            return None;
        }
        let description = std::mem::take(&mut self.description);
        let item = Item::new(ids.next(now_ms), description, self.quantity);
        self.quantity = MIN_QUANTITY;
        Some(item)
    }
}

//! Progress Summary
//!
//! Aggregate numbers for the footer, derived from the current list.

use std::fmt;

use crate::list::ItemList;

/// Share of packed items, rounded half up.
///
/// Stays below 100 while anything is unpacked, so 199 of 200 reads 99%.
pub fn percentage(packed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (packed * 100 * 2 + total) / (total * 2);
    let rounded = if packed < total { rounded.min(99) } else { rounded };
    rounded as u32
}

/// What the footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Empty,
    AllPacked {
        total: usize,
    },
    Progress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
}

impl Summary {
    pub fn of(list: &ItemList) -> Self {
        let total = list.len();
        if total == 0 {
            return Summary::Empty;
        }
        let packed = list.packed_count();
        match percentage(packed, total) {
            100 => Summary::AllPacked { total },
            percentage => Summary::Progress {
                total,
                packed,
                percentage,
            },
        }
    }

    /// Short form for log lines, e.g. "0 of 1 packed (0%)"
    pub fn compact(&self) -> String {
        match self {
            Summary::Empty => "empty list".to_string(),
            Summary::AllPacked { total } => format!("all {} packed (100%)", total),
            Summary::Progress {
                total,
                packed,
                percentage,
            } => format!("{} of {} packed ({}%)", packed, total, percentage),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty => f.write_str("🌴 Your list is empty. Add some items! 🌴"),
            Summary::AllPacked { .. } => f.write_str("🎒 All packed and ready to go!"),
            Summary::Progress {
                total,
                packed,
                percentage,
            } => write!(
                f,
                "🎒 You have {} items in your list, and you already packed {} ({}%).",
                total, packed, percentage
            ),
        }
    }
}

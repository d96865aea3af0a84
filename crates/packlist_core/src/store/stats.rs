//! Packing progress statistics.
//!
//! # Invariants
//! - `stats` is a pure function of the item slice.
//! - An empty list yields `PackingStats::Empty`, never a percentage.
//! - `percentage` rounds half up, matching display rounding.

use crate::model::item::Item;
use serde::{Deserialize, Serialize};

/// Derived progress summary for the stats surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PackingStats {
    /// No items on the list yet.
    Empty,
    Summary {
        total: usize,
        packed: usize,
        /// `round(packed / total * 100)`, in `0..=100`.
        percentage: u8,
    },
}

impl PackingStats {
    /// User-facing summary line.
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "Start adding some items to your packing list".to_string(),
            Self::Summary {
                percentage: 100, ..
            } => "You got everything! Ready to go".to_string(),
            Self::Summary {
                total,
                packed,
                percentage,
            } => format!(
                "You have {total} items on your list, and you already packed {packed} ({percentage}%)"
            ),
        }
    }
}

/// Computes progress statistics for `items`.
pub fn stats(items: &[Item]) -> PackingStats {
    let total = items.len();
    if total == 0 {
        return PackingStats::Empty;
    }
    let packed = items.iter().filter(|item| item.packed).count();
    PackingStats::Summary {
        total,
        packed,
        percentage: rounded_percentage(packed, total),
    }
}

fn rounded_percentage(part: usize, total: usize) -> u8 {
    // Integer half-up rounding of part * 100 / total.
    let scaled = (part as u128 * 200 + total as u128) / (total as u128 * 2);
    scaled.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::rounded_percentage;

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 200), 1);
        assert_eq!(rounded_percentage(0, 5), 0);
        assert_eq!(rounded_percentage(5, 5), 100);
    }
}

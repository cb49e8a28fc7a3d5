//! Receipt data structures.

use serde::{Deserialize, Serialize};

/// A single purchased line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description; may be empty
    pub short_description: String,

    /// Price as a decimal string, e.g. `"6.49"`
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt and its computed score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Assigned by the store on save; empty before that
    #[serde(default)]
    pub id: String,

    pub retailer: String,

    /// `YYYY-MM-DD`
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,

    pub items: Vec<Item>,

    /// Total as a decimal string, e.g. `"35.35"`
    pub total: String,

    /// Computed by the points calculator, never supplied by the caller
    #[serde(default)]
    pub points: u64,
}

impl Receipt {
    /// Build an unsaved, unscored receipt.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: impl Into<String>,
        purchase_time: impl Into<String>,
        items: Vec<Item>,
        total: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            retailer: retailer.into(),
            purchase_date: purchase_date.into(),
            purchase_time: purchase_time.into(),
            items,
            total: total.into(),
            points: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

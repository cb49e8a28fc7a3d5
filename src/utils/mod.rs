//! Utility functions and helpers.

pub mod report;

pub use report::{ConfigReport, ReceiptReport};

use crate::models::{Money, Receipt};

/// Sum of all item prices, or `None` if any price fails to parse or the sum
/// overflows.
pub fn item_price_sum(receipt: &Receipt) -> Option<Money> {
    receipt.items.iter().try_fold(Money::ZERO, |sum, item| {
        let price: Money = item.price.parse().ok()?;
        sum.cents().checked_add(price.cents()).map(Money::from_cents)
    })
}

/// Whether the stated total differs from the sum of the item prices.
///
/// Scoring never cross-checks the two; this is for reporting only. Returns
/// `None` when either side cannot be parsed.
pub fn total_mismatch(receipt: &Receipt) -> Option<(Money, Money)> {
    let stated: Money = receipt.total.parse().ok()?;
    let summed = item_price_sum(receipt)?;
    (stated != summed).then_some((stated, summed))
}

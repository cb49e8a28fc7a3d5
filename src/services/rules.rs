// src/services/rules.rs

//! The seven points rules.
//!
//! Each rule is a pure function over already-parsed inputs, so the
//! contributions are independent of each other and of evaluation order.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;

use crate::models::{Item, Money};

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Purchases in `[AFTERNOON_START_HOUR, AFTERNOON_END_HOUR)` earn the bonus.
pub const AFTERNOON_START_HOUR: u32 = 14;
pub const AFTERNOON_END_HOUR: u32 = 16;

/// A single letter (`L*`) or decimal digit (`Nd`).
static NAME_CHAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nd}]").ok());

/// One point per letter or decimal digit in the retailer name.
///
/// Superscripts, fractions, Roman numerals and combining marks do not count.
pub fn retailer_name_points(retailer: &str) -> u64 {
    match NAME_CHAR.as_ref() {
        Some(re) => re.find_iter(retailer).count() as u64,
        None => {
            log::error!("retailer name pattern failed to compile");
            0
        }
    }
}

/// Bonus when the total has no cents.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Bonus when the total is a multiple of $0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(25) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Five points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// 20% of the price, rounded up, when the trimmed description length is a
/// non-zero multiple of three.
pub fn item_description_points(item: &Item, price: Money) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length > 0 && length % 3 == 0 {
        price.ceil_fifth()
    } else {
        0
    }
}

/// Bonus when the day of the month is odd.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Bonus for purchases from 2:00pm up to, but not including, 4:00pm.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

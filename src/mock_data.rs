//! Generates the mock transactions and price histogram shown on the dashboard.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::transaction::{Transaction, TransactionId};

/// The number of transactions generated for each month.
pub const TRANSACTION_COUNT: TransactionId = 10;

/// The range that transaction prices are drawn from, in whole dollars.
pub const PRICE_RANGE: RangeInclusive<u32> = 50..=549;

/// The price bands shown on the bar chart, in display order.
pub const PRICE_RANGE_LABELS: [&str; 5] =
    ["$0-$100", "$100-$200", "$200-$300", "$300-$400", "$400-$500"];

/// The range that histogram bucket counts are drawn from.
pub const BUCKET_COUNT_RANGE: RangeInclusive<u32> = 1..=10;

/// One bar of the price distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBucket {
    /// The price band, e.g. "$100-$200".
    pub label: &'static str,
    /// The number of items in the band.
    pub count: u32,
}

/// Generate [TRANSACTION_COUNT] transactions with IDs counting up from 1 and
/// prices drawn uniformly from [PRICE_RANGE].
pub fn generate_transactions<R: Rng>(rng: &mut R) -> Vec<Transaction> {
    (1..=TRANSACTION_COUNT)
        .map(|id| Transaction::mock(id, rng.gen_range(PRICE_RANGE)))
        .collect()
}

/// Generate one bucket per label in [PRICE_RANGE_LABELS] with a count drawn
/// uniformly from [BUCKET_COUNT_RANGE].
///
/// The counts are not derived from any transactions.
pub fn generate_price_histogram<R: Rng>(rng: &mut R) -> Vec<HistogramBucket> {
    PRICE_RANGE_LABELS
        .iter()
        .map(|&label| HistogramBucket {
            label,
            count: rng.gen_range(BUCKET_COUNT_RANGE),
        })
        .collect()
}

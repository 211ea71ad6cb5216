use crate::domain::model::{Money, Tier};

/// Gold passengers get this much off the list price.
pub const GOLD_DISCOUNT_PERCENT: u64 = 10;

/// Price a passenger of `tier` pays for an activity listed at `cost`.
pub fn price_for(tier: Tier, cost: Money) -> Money {
    match tier {
        Tier::Standard => cost,
        Tier::Gold => cost.percent(100 - GOLD_DISCOUNT_PERCENT),
        Tier::Premium => Money::ZERO,
    }
}

use crate::utils::error::BookingError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            pub(crate) const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $label, self.0)
            }
        }
    };
}

typed_id!(
    /// Slot of a destination inside a booking.
    DestinationId,
    "Destination"
);
typed_id!(
    /// Slot of an activity inside a booking.
    ActivityId,
    "Activity"
);
typed_id!(
    /// Slot of a passenger inside a booking. Not the passenger number.
    PassengerId,
    "Passenger"
);

/// Amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units. Saturates at `u64::MAX` cents.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// `percent`% of this amount, rounded half-up to the cent.
    pub fn percent(self, percent: u64) -> Money {
        let cents = (self.0 as u128 * percent as u128 + 50) / 100;
        Money(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl TryFrom<f64> for Money {
    type Error = BookingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(BookingError::InvalidConfigValueError {
                field: "amount".to_string(),
                value: value.to_string(),
                reason: "Amount must be a finite, non-negative number".to_string(),
            });
        }
        let cents = (value * 100.0).round();
        // u64::MAX as f64 rounds up to 2^64
        if cents >= u64::MAX as f64 {
            return Err(BookingError::InvalidConfigValueError {
                field: "amount".to_string(),
                value: value.to_string(),
                reason: "Amount is too large".to_string(),
            });
        }
        Ok(Money(cents as u64))
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Passenger classification controlling activity pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Standard,
    Gold,
    Premium,
}

impl Tier {
    /// Premium passengers are never charged, so their balance is not tracked.
    pub fn tracks_balance(self) -> bool {
        !matches!(self, Tier::Premium)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Standard => "Standard",
            Tier::Gold => "Gold",
            Tier::Premium => "Premium",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Destination {
    pub name: String,
    pub activities: Vec<ActivityId>,
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub cost: Money,
    pub capacity: usize,
    pub destination: DestinationId,
}

#[derive(Debug, Clone)]
pub struct Passenger {
    pub name: String,
    pub number: u32,
    pub tier: Tier,
    pub balance: Money,
}

#[derive(Debug, Clone)]
pub struct TravelPackage {
    pub name: String,
    pub capacity: usize,
    pub itinerary: Vec<DestinationId>,
    pub passengers: Vec<PassengerId>,
}

impl TravelPackage {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            itinerary: Vec::new(),
            passengers: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }
}

/// One passenger-activity pair; the only record of who is signed up for what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    pub passenger: PassengerId,
    pub activity: ActivityId,
    pub charged: Money,
}

/// Successful activity signup, by pricing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUp {
    FullPrice { charged: Money, balance: Money },
    Discounted { charged: Money, balance: Money },
    Premium,
}

impl SignUp {
    pub fn charged(&self) -> Money {
        match self {
            SignUp::FullPrice { charged, .. } | SignUp::Discounted { charged, .. } => *charged,
            SignUp::Premium => Money::ZERO,
        }
    }
}

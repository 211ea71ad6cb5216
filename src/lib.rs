pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ScenarioConfig;
pub use self::core::booking::Booking;
pub use self::core::report::Availability;
pub use self::core::scenario::{RunSummary, ScenarioRunner};
pub use domain::model::{ActivityId, DestinationId, Money, PassengerId, SignUp, Tier, TravelPackage};
pub use domain::ports::Reporter;
pub use utils::error::{BookingError, Result};
pub use utils::output::{ConsoleReporter, MemoryReporter};

pub mod booking;
pub mod pricing;
pub mod report;
pub mod scenario;

pub use crate::domain::model::{
    Activity, ActivityId, Destination, DestinationId, Enrollment, Money, Passenger, PassengerId,
    SignUp, Tier, TravelPackage,
};
pub use crate::domain::ports::Reporter;
pub use crate::utils::error::Result;

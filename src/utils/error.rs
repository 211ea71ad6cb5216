use crate::domain::model::{ActivityId, DestinationId, Money, PassengerId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Insufficient balance to sign up for {activity} (requires {required}, available {available})")]
    InsufficientBalance {
        passenger: String,
        activity: String,
        required: Money,
        available: Money,
    },

    #[error("Activity {activity} at {destination} is already full")]
    ActivityFull {
        activity: String,
        destination: String,
    },

    #[error("Cannot add {passenger}, {package} is full")]
    PackageFull { passenger: String, package: String },

    #[error("{passenger} is already signed up for {activity}")]
    AlreadyEnrolled { passenger: String, activity: String },

    #[error("{passenger} is already part of {package}")]
    AlreadyInPackage { passenger: String, package: String },

    #[error("Passenger number {number} is already taken by {existing}")]
    DuplicatePassengerNumber { number: u32, existing: String },

    #[error("Unknown passenger: {0}")]
    UnknownPassenger(PassengerId),

    #[error("Unknown activity: {0}")]
    UnknownActivity(ActivityId),

    #[error("Unknown destination: {0}")]
    UnknownDestination(DestinationId),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rule-based rejections: insufficient balance, full activity or package.
    Booking,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InsufficientBalance { .. }
            | Self::ActivityFull { .. }
            | Self::PackageFull { .. }
            | Self::AlreadyEnrolled { .. }
            | Self::AlreadyInPackage { .. } => ErrorCategory::Booking,
            Self::UnknownPassenger(_) | Self::UnknownActivity(_) | Self::UnknownDestination(_) => {
                ErrorCategory::Lookup
            }
            Self::DuplicatePassengerNumber { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Booking => ErrorSeverity::Low,
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Booking rejections are expected outcomes; the caller reports them and carries on.
    pub fn is_rejection(&self) -> bool {
        self.category() == ErrorCategory::Booking
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InsufficientBalance { .. } => "Top up the passenger balance or pick a cheaper activity",
            Self::ActivityFull { .. } => "Choose another activity with remaining capacity",
            Self::PackageFull { .. } => "Increase the package capacity or use another package",
            Self::AlreadyEnrolled { .. } | Self::AlreadyInPackage { .. } => {
                "No action needed, the passenger is already registered"
            }
            Self::UnknownPassenger(_) | Self::UnknownActivity(_) | Self::UnknownDestination(_) => {
                "Make sure the entity was created in this booking before referencing it"
            }
            Self::DuplicatePassengerNumber { .. } => "Give every passenger a unique number",
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Check the scenario file against the documented format"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Booking => format!("Booking rejected: {}", self),
            ErrorCategory::Lookup => format!("Lookup failed: {}", self),
            ErrorCategory::Configuration => format!("Scenario configuration is invalid: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_low_severity() {
        let err = BookingError::ActivityFull {
            activity: "Activity 1".to_string(),
            destination: "Destination 1".to_string(),
        };
        assert!(err.is_rejection());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "Activity Activity 1 at Destination 1 is already full");
    }

    #[test]
    fn test_config_errors_are_not_rejections() {
        let err = BookingError::ConfigValidationError {
            field: "package.name".to_string(),
            message: "missing".to_string(),
        };
        assert!(!err.is_rejection());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("package.name"));
    }

    #[test]
    fn test_insufficient_balance_message() {
        let err = BookingError::InsufficientBalance {
            passenger: "Passenger 1".to_string(),
            activity: "Activity 2".to_string(),
            required: Money::from_cents(15_000),
            available: Money::from_cents(10_000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance to sign up for Activity 2 (requires 150.00, available 100.00)"
        );
    }
}

use crate::domain::model::{Money, Tier};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_capacity, validate_non_empty_string, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub package: PackageConfig,
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<ActivityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: Money,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerConfig {
    pub name: String,
    pub number: u32,
    pub tier: Tier,
    #[serde(default)]
    pub balance: Money,
    pub join_package: Option<bool>,
    #[serde(default)]
    pub activities: Vec<String>, // signed up in this order
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub itinerary: Option<bool>,
    pub passenger_list: Option<bool>,
    pub details_for: Option<Vec<u32>>,
    pub available_activities: Option<bool>,
}

impl PassengerConfig {
    pub fn joins_package(&self) -> bool {
        self.join_package.unwrap_or(true)
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a scenario from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables are left as written
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The fixed demo: two destinations, two activities, a package for two,
    /// a Standard and a Gold passenger.
    pub fn builtin() -> Self {
        Self {
            package: PackageConfig {
                name: "Travel Package 1".to_string(),
                capacity: 2,
            },
            destinations: vec![
                DestinationConfig {
                    name: "Destination 1".to_string(),
                    activities: vec![ActivityConfig {
                        name: "Activity 1".to_string(),
                        description: "Description 1".to_string(),
                        cost: Money::from_units(100),
                        capacity: 3,
                    }],
                },
                DestinationConfig {
                    name: "Destination 2".to_string(),
                    activities: vec![ActivityConfig {
                        name: "Activity 2".to_string(),
                        description: "Description 2".to_string(),
                        cost: Money::from_units(150),
                        capacity: 2,
                    }],
                },
            ],
            passengers: vec![
                PassengerConfig {
                    name: "Passenger 1".to_string(),
                    number: 1,
                    tier: Tier::Standard,
                    balance: Money::from_units(200),
                    join_package: Some(true),
                    activities: vec!["Activity 1".to_string()],
                },
                PassengerConfig {
                    name: "Passenger 2".to_string(),
                    number: 2,
                    tier: Tier::Gold,
                    balance: Money::from_units(300),
                    join_package: Some(true),
                    activities: vec!["Activity 2".to_string()],
                },
            ],
            report: Some(ReportConfig {
                itinerary: Some(true),
                passenger_list: Some(true),
                details_for: Some(vec![1]),
                available_activities: Some(true),
            }),
        }
    }

    /// Check the scenario before anything is built from it
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("package.name", &self.package.name)?;
        validate_capacity("package.capacity", self.package.capacity)?;

        for destination in &self.destinations {
            validate_non_empty_string("destinations.name", &destination.name)?;
            for activity in &destination.activities {
                validate_non_empty_string("destinations.activities.name", &activity.name)?;
                validate_capacity("destinations.activities.capacity", activity.capacity)?;
            }
        }
        validate_unique(
            "destinations.name",
            self.destinations.iter().map(|d| &d.name),
        )?;
        validate_unique(
            "destinations.activities.name",
            self.destinations
                .iter()
                .flat_map(|d| d.activities.iter().map(|a| &a.name)),
        )?;

        for passenger in &self.passengers {
            validate_non_empty_string("passengers.name", &passenger.name)?;
            for activity in &passenger.activities {
                if self.find_activity(activity).is_none() {
                    return Err(BookingError::InvalidConfigValueError {
                        field: "passengers.activities".to_string(),
                        value: activity.clone(),
                        reason: format!("{} references an activity that does not exist", passenger.name),
                    });
                }
            }
        }
        validate_unique("passengers.number", self.passengers.iter().map(|p| &p.number))?;

        for number in self.details_for() {
            if !self.passengers.iter().any(|p| p.number == *number) {
                return Err(BookingError::InvalidConfigValueError {
                    field: "report.details_for".to_string(),
                    value: number.to_string(),
                    reason: "No passenger with this number".to_string(),
                });
            }
        }

        Ok(())
    }

    fn find_activity(&self, name: &str) -> Option<&ActivityConfig> {
        self.destinations
            .iter()
            .flat_map(|d| d.activities.iter())
            .find(|a| a.name == name)
    }

    pub fn activity_count(&self) -> usize {
        self.destinations.iter().map(|d| d.activities.len()).sum()
    }

    pub fn print_itinerary(&self) -> bool {
        self.report.as_ref().and_then(|r| r.itinerary).unwrap_or(true)
    }

    pub fn print_passenger_list(&self) -> bool {
        self.report.as_ref().and_then(|r| r.passenger_list).unwrap_or(true)
    }

    pub fn print_available_activities(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|r| r.available_activities)
            .unwrap_or(true)
    }

    /// Passenger numbers to print details for
    pub fn details_for(&self) -> &[u32] {
        self.report
            .as_ref()
            .and_then(|r| r.details_for.as_deref())
            .unwrap_or(&[])
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

pub mod scenario_config;

pub use scenario_config::ScenarioConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "travel-booking")]
#[command(about = "Run a travel package booking scenario and print its reports")]
pub struct CliConfig {
    /// TOML scenario file; the built-in demo scenario runs when omitted
    #[arg(long)]
    pub scenario: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Validate the scenario and list the planned steps without running them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_scenario(&self) -> Result<ScenarioConfig> {
        match &self.scenario {
            Some(path) => ScenarioConfig::from_file(path),
            None => Ok(ScenarioConfig::builtin()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["travel-booking"]);
        assert!(config.scenario.is_none());
        assert!(!config.verbose);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
        assert_eq!(config.load_scenario().unwrap().package.name, "Travel Package 1");
    }

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "travel-booking",
            "--scenario",
            "alps.toml",
            "--verbose",
            "--dry-run",
        ]);
        assert_eq!(config.scenario.as_deref(), Some("alps.toml"));
        assert!(config.verbose);
        assert!(config.dry_run);
    }

    #[test]
    fn test_empty_scenario_path_is_invalid() {
        let config = CliConfig::parse_from(["travel-booking", "--scenario", ""]);
        assert!(config.validate().is_err());
    }
}

use anyhow::Result;
use tempfile::TempDir;
use travel_booking::utils::validation::Validate;
use travel_booking::{MemoryReporter, Money, ScenarioConfig, ScenarioRunner};

/// Full output of the built-in scenario
#[test]
fn test_builtin_scenario_end_to_end() -> Result<()> {
    let runner = ScenarioRunner::new(ScenarioConfig::builtin());
    let (booking, summary) = runner.run(MemoryReporter::new())?;

    assert_eq!(summary.signups, 2);
    assert!(summary.rejections.is_empty());

    let lines = booking.reporter().lines();
    let expected = [
        "Passenger 1 added to Travel Package 1",
        "Passenger 2 added to Travel Package 1",
        "Passenger 1 signed up for Activity 1",
        "Passenger 2 signed up for Activity 2 with 10% discount",
        "Itinerary for Travel Package 1:",
        "- Destination 1:",
        "  * Activity 1, Cost: 100.00",
        "- Destination 2:",
        "  * Activity 2, Cost: 150.00",
        "Passenger list for Travel Package 1:",
        "Capacity: 2",
        "Number of passengers: 2",
        "- Passenger 1, Passenger Number: 1",
        "- Passenger 2, Passenger Number: 2",
        "Details for passenger Passenger 1:",
        "Passenger Number: 1",
        "Balance: 100.00",
        "Activities signed up by Passenger 1:",
        "- Activity 1 at Destination 1, Cost: 100.00",
        "Available activities for Travel Package 1:",
        "- Activity 1 at Destination 1, Remaining Capacity: 2",
        "- Activity 2 at Destination 2, Remaining Capacity: 1",
    ];
    assert_eq!(lines, expected);

    Ok(())
}

#[test]
fn test_scenario_from_file_with_rejections() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("island_hopping.toml");

    let config_content = r#"
[package]
name = "Island Hopping"
capacity = 2

[[destinations]]
name = "Naxos"

[[destinations.activities]]
name = "Sailing"
description = "Half-day boat trip"
cost = 80
capacity = 1

[[destinations]]
name = "Paros"

[[destinations.activities]]
name = "Diving"
cost = 200
capacity = 2

[[passengers]]
name = "Lin"
number = 1
tier = "standard"
balance = 150
activities = ["Sailing", "Diving"]

[[passengers]]
name = "Noor"
number = 2
tier = "premium"
activities = ["Sailing", "Diving"]

[[passengers]]
name = "Kai"
number = 3
tier = "gold"
balance = 180

[report]
details_for = [1, 2]
"#;
    std::fs::write(&config_path, config_content)?;

    let config = ScenarioConfig::from_file(&config_path)?;
    config.validate()?;

    let (booking, summary) = ScenarioRunner::new(config).run(MemoryReporter::new())?;

    // Kai: package full. Lin: cannot afford Diving. Noor: Sailing already full
    assert_eq!(summary.passengers_added, 2);
    assert_eq!(summary.signups, 2);
    assert_eq!(summary.rejections.len(), 3);

    let lin = booking.find_passenger(1).expect("Lin is registered");
    let noor = booking.find_passenger(2).expect("Noor is registered");
    assert_eq!(booking.passenger(lin)?.balance, Money::from_units(70));
    assert_eq!(booking.activities_of(lin).count(), 1);
    assert_eq!(booking.activities_of(noor).count(), 1);

    let reporter = booking.reporter();
    assert!(reporter.contains("Cannot add Kai, Island Hopping is full"));
    assert!(reporter.contains("Insufficient balance to sign up for Diving"));
    assert!(reporter.contains("Activity Sailing at Naxos is already full"));
    assert!(reporter.contains("Noor signed up for Diving as a premium passenger"));
    assert!(reporter.contains("- Sailing at Naxos, Remaining Capacity: 0"));
    assert!(reporter.contains("- Diving at Paros, Remaining Capacity: 1"));

    Ok(())
}

#[test]
fn test_invalid_scenario_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &config_path,
        r#"
[package]
name = "Broken"
capacity = 0
"#,
    )?;

    let config = ScenarioConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("package.capacity"));
    assert!(!err.is_rejection());

    Ok(())
}

#[test]
fn test_dry_run_plan_does_not_enroll() {
    let runner = ScenarioRunner::new(ScenarioConfig::builtin());
    let steps = runner.plan();

    assert!(steps.contains(&"sign up Passenger 1 (Standard) for Activity 1".to_string()));
    assert_eq!(runner.config().passengers[0].balance, Money::from_units(200));
}

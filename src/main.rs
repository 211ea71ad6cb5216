use clap::Parser;
use travel_booking::utils::error::{BookingError, ErrorSeverity};
use travel_booking::utils::{logger, validation::Validate};
use travel_booking::{CliConfig, ConsoleReporter, ScenarioRunner};

fn main() {
    let config = CliConfig::parse();

    // logging first, so config errors are reported
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting travel-booking CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Scenario failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // exit code follows severity
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), BookingError> {
    config.validate()?;

    let scenario = config.load_scenario()?;
    scenario.validate()?;
    tracing::info!("✅ Scenario loaded and validated: {}", scenario.package.name);

    let runner = ScenarioRunner::new(scenario);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No signups will be made");
        for step in runner.plan() {
            println!("- {}", step);
        }
        return Ok(());
    }

    let (_, summary) = runner.run(ConsoleReporter::new())?;
    if !summary.rejections.is_empty() {
        tracing::warn!("⚠️ {} booking requests were rejected", summary.rejections.len());
    }
    Ok(())
}

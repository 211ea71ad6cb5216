use crate::config::ScenarioConfig;
use crate::core::booking::Booking;
use crate::domain::model::{PassengerId, TravelPackage};
use crate::domain::ports::Reporter;
use crate::utils::error::{BookingError, Result};

/// Counts of what happened during a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passengers_added: usize,
    pub signups: usize,
    pub rejections: Vec<String>,
}

/// Drives one scenario: builds the booking, enrolls passengers, prints reports.
pub struct ScenarioRunner {
    config: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Creates every destination, activity and passenger, and lays out the itinerary.
    pub fn build<R: Reporter>(&self, reporter: R) -> Result<Booking<R>> {
        let package = TravelPackage::new(&self.config.package.name, self.config.package.capacity);
        let mut booking = Booking::new(package, reporter)?;

        for destination in &self.config.destinations {
            let dest_id = booking.create_destination(&destination.name);
            for activity in &destination.activities {
                booking.add_activity(
                    dest_id,
                    &activity.name,
                    &activity.description,
                    activity.cost,
                    activity.capacity,
                )?;
            }
            booking.add_destination(dest_id)?;
        }

        for passenger in &self.config.passengers {
            booking.register_passenger(
                &passenger.name,
                passenger.number,
                passenger.tier,
                passenger.balance,
            )?;
        }

        tracing::debug!(
            "Built {} with {} destinations, {} activities, {} passengers",
            self.config.package.name,
            self.config.destinations.len(),
            self.config.activity_count(),
            self.config.passengers.len()
        );
        Ok(booking)
    }

    pub fn run<R: Reporter>(&self, reporter: R) -> Result<(Booking<R>, RunSummary)> {
        tracing::info!("🚀 Running scenario for {}", self.config.package.name);
        let mut booking = self.build(reporter)?;
        let mut summary = RunSummary::default();

        for passenger in self.config.passengers.iter().filter(|p| p.joins_package()) {
            let id = self.passenger_id(&booking, passenger.number)?;
            if tolerate(booking.add_passenger(id), &mut summary)?.is_some() {
                summary.passengers_added += 1;
            }
        }

        for passenger in &self.config.passengers {
            let id = self.passenger_id(&booking, passenger.number)?;
            for activity_name in &passenger.activities {
                let activity = booking.find_activity(activity_name).ok_or_else(|| {
                    BookingError::InvalidConfigValueError {
                        field: "passengers.activities".to_string(),
                        value: activity_name.clone(),
                        reason: "Unknown activity".to_string(),
                    }
                })?;
                if tolerate(booking.sign_up_for_activity(id, activity), &mut summary)?.is_some() {
                    summary.signups += 1;
                }
            }
        }

        if self.config.print_itinerary() {
            booking.print_itinerary();
        }
        if self.config.print_passenger_list() {
            booking.print_passenger_list();
        }
        for &number in self.config.details_for() {
            let id = self.passenger_id(&booking, number)?;
            booking.print_passenger_details(id)?;
        }
        if self.config.print_available_activities() {
            booking.print_available_activities();
        }

        tracing::info!(
            "✅ Scenario finished: {} passengers added, {} signups, {} rejections",
            summary.passengers_added,
            summary.signups,
            summary.rejections.len()
        );
        Ok((booking, summary))
    }

    /// Steps `run` would take, without touching any balances.
    pub fn plan(&self) -> Vec<String> {
        let mut steps = Vec::new();
        for destination in &self.config.destinations {
            steps.push(format!(
                "add destination {} ({} activities)",
                destination.name,
                destination.activities.len()
            ));
        }
        for passenger in self.config.passengers.iter().filter(|p| p.joins_package()) {
            steps.push(format!(
                "add {} to {}",
                passenger.name, self.config.package.name
            ));
        }
        for passenger in &self.config.passengers {
            for activity in &passenger.activities {
                steps.push(format!(
                    "sign up {} ({}) for {}",
                    passenger.name, passenger.tier, activity
                ));
            }
        }
        steps
    }

    fn passenger_id<R: Reporter>(&self, booking: &Booking<R>, number: u32) -> Result<PassengerId> {
        booking
            .find_passenger(number)
            .ok_or_else(|| BookingError::InvalidConfigValueError {
                field: "passengers.number".to_string(),
                value: number.to_string(),
                reason: "No passenger with this number".to_string(),
            })
    }
}

/// Booking rejections are recorded and skipped; anything else aborts the run.
fn tolerate<T>(result: Result<T>, summary: &mut RunSummary) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_rejection() => {
            tracing::warn!("⚠️ {} ({})", e, e.recovery_suggestion());
            summary.rejections.push(e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

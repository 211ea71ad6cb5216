use crate::core::booking::Booking;
use crate::domain::model::{ActivityId, PassengerId};
use crate::domain::ports::Reporter;
use crate::utils::error::Result;

/// Remaining room on one activity of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub activity: ActivityId,
    pub activity_name: String,
    pub destination_name: String,
    pub remaining: usize,
}

impl<R: Reporter> Booking<R> {
    pub fn print_itinerary(&mut self) {
        let mut lines = vec![format!("Itinerary for {}:", self.package.name)];
        for &dest_id in &self.package.itinerary {
            let destination = &self.destinations[dest_id.index()];
            lines.push(format!("- {}:", destination.name));
            for &activity_id in &destination.activities {
                let activity = &self.activities[activity_id.index()];
                lines.push(format!("  * {}, Cost: {}", activity.name, activity.cost));
            }
        }
        self.emit(lines);
    }

    pub fn print_passenger_list(&mut self) {
        let mut lines = vec![
            format!("Passenger list for {}:", self.package.name),
            format!("Capacity: {}", self.package.capacity),
            format!("Number of passengers: {}", self.package.passengers.len()),
        ];
        for &id in &self.package.passengers {
            let passenger = &self.passengers[id.index()];
            lines.push(format!(
                "- {}, Passenger Number: {}",
                passenger.name, passenger.number
            ));
        }
        self.emit(lines);
    }

    /// Number, balance (not for premium passengers) and signed-up activities.
    pub fn print_passenger_details(&mut self, passenger: PassengerId) -> Result<()> {
        let p = self.passenger(passenger)?;
        let mut lines = vec![
            format!("Details for passenger {}:", p.name),
            format!("Passenger Number: {}", p.number),
        ];
        if p.tier.tracks_balance() {
            lines.push(format!("Balance: {}", p.balance));
        }
        lines.extend(self.activity_lines(passenger)?);
        self.emit(lines);
        Ok(())
    }

    pub fn print_activities_signed_up(&mut self, passenger: PassengerId) -> Result<()> {
        let lines = self.activity_lines(passenger)?;
        self.emit(lines);
        Ok(())
    }

    pub fn print_available_activities(&mut self) {
        let mut lines = vec![format!("Available activities for {}:", self.package.name)];
        for slot in self.available_activities() {
            lines.push(format!(
                "- {} at {}, Remaining Capacity: {}",
                slot.activity_name, slot.destination_name, slot.remaining
            ));
        }
        self.emit(lines);
    }

    /// Every activity of every itinerary destination with its remaining capacity.
    pub fn available_activities(&self) -> Vec<Availability> {
        self.package
            .itinerary
            .iter()
            .map(|&dest_id| &self.destinations[dest_id.index()])
            .flat_map(|destination| {
                destination.activities.iter().map(move |&activity_id| {
                    let activity = &self.activities[activity_id.index()];
                    Availability {
                        activity: activity_id,
                        activity_name: activity.name.clone(),
                        destination_name: destination.name.clone(),
                        remaining: activity
                            .capacity
                            .saturating_sub(self.enrolled_count(activity_id)),
                    }
                })
            })
            .collect()
    }

    fn activity_lines(&self, passenger: PassengerId) -> Result<Vec<String>> {
        let p = self.passenger(passenger)?;
        let mut lines = vec![format!("Activities signed up by {}:", p.name)];
        for activity_id in self.activities_of(passenger) {
            let activity = &self.activities[activity_id.index()];
            let destination = &self.destinations[activity.destination.index()];
            lines.push(format!(
                "- {} at {}, Cost: {}",
                activity.name, destination.name, activity.cost
            ));
        }
        Ok(lines)
    }

    fn emit(&mut self, lines: Vec<String>) {
        for line in &lines {
            self.reporter.line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::booking::Booking;
    use crate::domain::model::{Money, Tier, TravelPackage};
    use crate::utils::output::MemoryReporter;

    fn sample_booking() -> Booking<MemoryReporter> {
        let mut booking = Booking::new(TravelPackage::new("Travel Package 1", 2), MemoryReporter::new()).unwrap();
        let d1 = booking.create_destination("Destination 1");
        let d2 = booking.create_destination("Destination 2");
        booking
            .add_activity(d1, "Activity 1", "Description 1", Money::from_units(100), 3)
            .unwrap();
        booking
            .add_activity(d2, "Activity 2", "Description 2", Money::from_units(150), 2)
            .unwrap();
        booking.add_destination(d1).unwrap();
        booking.add_destination(d2).unwrap();
        booking
    }

    #[test]
    fn test_print_itinerary() {
        let mut booking = sample_booking();
        booking.print_itinerary();

        let lines = booking.reporter().lines();
        assert_eq!(lines[0], "Itinerary for Travel Package 1:");
        assert_eq!(lines[1], "- Destination 1:");
        assert_eq!(lines[2], "  * Activity 1, Cost: 100.00");
        assert_eq!(lines[3], "- Destination 2:");
        assert_eq!(lines[4], "  * Activity 2, Cost: 150.00");
    }

    #[test]
    fn test_print_passenger_list() {
        let mut booking = sample_booking();
        let p = booking
            .register_passenger("Passenger 1", 1, Tier::Standard, Money::from_units(200))
            .unwrap();
        booking.add_passenger(p).unwrap();
        booking.reporter_mut().take();

        booking.print_passenger_list();

        let lines = booking.reporter().lines();
        assert_eq!(lines[1], "Capacity: 2");
        assert_eq!(lines[2], "Number of passengers: 1");
        assert_eq!(lines[3], "- Passenger 1, Passenger Number: 1");
    }

    #[test]
    fn test_passenger_details_hide_premium_balance() {
        let mut booking = sample_booking();
        let standard = booking
            .register_passenger("Passenger 1", 1, Tier::Standard, Money::from_units(200))
            .unwrap();
        let premium = booking
            .register_passenger("Passenger 3", 3, Tier::Premium, Money::from_units(999))
            .unwrap();
        let activity = booking.find_activity("Activity 1").unwrap();
        booking.sign_up_for_activity(standard, activity).unwrap();
        booking.reporter_mut().take();

        booking.print_passenger_details(standard).unwrap();
        assert!(booking.reporter().contains("Passenger Number: 1"));
        assert!(booking.reporter().contains("Balance: 100.00"));
        assert!(booking
            .reporter()
            .contains("- Activity 1 at Destination 1, Cost: 100.00"));
        booking.reporter_mut().take();

        booking.print_passenger_details(premium).unwrap();
        assert!(booking.reporter().contains("Passenger Number: 3"));
        assert!(!booking.reporter().contains("Balance"));
    }

    #[test]
    fn test_available_activities_track_enrollment() {
        let mut booking = sample_booking();
        let p = booking
            .register_passenger("Passenger 2", 2, Tier::Gold, Money::from_units(300))
            .unwrap();
        let activity = booking.find_activity("Activity 2").unwrap();
        booking.sign_up_for_activity(p, activity).unwrap();

        let slots = booking.available_activities();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].remaining, 3);
        assert_eq!(slots[1].remaining, 1);
        assert_eq!(slots[1].destination_name, "Destination 2");

        booking.reporter_mut().take();
        booking.print_available_activities();
        assert!(booking
            .reporter()
            .contains("- Activity 2 at Destination 2, Remaining Capacity: 1"));
    }

    #[test]
    fn test_activities_outside_itinerary_are_not_listed() {
        let mut booking = sample_booking();
        let d3 = booking.create_destination("Destination 3");
        booking
            .add_activity(d3, "Activity 3", "Description 3", Money::from_units(10), 1)
            .unwrap();

        let names: Vec<_> = booking
            .available_activities()
            .into_iter()
            .map(|slot| slot.activity_name)
            .collect();
        assert_eq!(names, vec!["Activity 1", "Activity 2"]);
    }
}

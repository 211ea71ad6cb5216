use crate::core::pricing::{price_for, GOLD_DISCOUNT_PERCENT};
use crate::domain::model::{
    Activity, ActivityId, Destination, DestinationId, Enrollment, Money, Passenger, PassengerId,
    SignUp, Tier, TravelPackage,
};
use crate::domain::ports::Reporter;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{validate_capacity, validate_non_empty_string};

/// Owns every entity of one travel package and the enrollment relation between
/// passengers and activities. Entities are addressed by typed ids into the arenas.
pub struct Booking<R: Reporter> {
    pub(crate) package: TravelPackage,
    pub(crate) destinations: Vec<Destination>,
    pub(crate) activities: Vec<Activity>,
    pub(crate) passengers: Vec<Passenger>,
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) reporter: R,
}

impl<R: Reporter> Booking<R> {
    /// Starts an empty booking for `package`, which must have room for at least one passenger.
    pub fn new(package: TravelPackage, reporter: R) -> Result<Self> {
        validate_capacity("package.capacity", package.capacity)?;
        Ok(Self {
            package,
            destinations: Vec::new(),
            activities: Vec::new(),
            passengers: Vec::new(),
            enrollments: Vec::new(),
            reporter,
        })
    }

    pub fn package(&self) -> &TravelPackage {
        &self.package
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    // ---- setup ----

    pub fn create_destination(&mut self, name: impl Into<String>) -> DestinationId {
        let id = DestinationId::new(self.destinations.len());
        self.destinations.push(Destination {
            name: name.into(),
            activities: Vec::new(),
        });
        id
    }

    /// Creates an activity hosted by `destination` and appends it to the destination's list.
    pub fn add_activity(
        &mut self,
        destination: DestinationId,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: Money,
        capacity: usize,
    ) -> Result<ActivityId> {
        let name = name.into();
        validate_non_empty_string("activity.name", &name)?;
        validate_capacity("activity.capacity", capacity)?;

        let id = ActivityId::new(self.activities.len());
        let host = self
            .destinations
            .get_mut(destination.index())
            .ok_or(BookingError::UnknownDestination(destination))?;
        host.activities.push(id);

        tracing::debug!("Added activity {} to {}", name, host.name);
        self.activities.push(Activity {
            name,
            description: description.into(),
            cost,
            capacity,
            destination,
        });
        Ok(id)
    }

    pub fn register_passenger(
        &mut self,
        name: impl Into<String>,
        number: u32,
        tier: Tier,
        balance: Money,
    ) -> Result<PassengerId> {
        if let Some(existing) = self.passengers.iter().find(|p| p.number == number) {
            return Err(BookingError::DuplicatePassengerNumber {
                number,
                existing: existing.name.clone(),
            });
        }

        let id = PassengerId::new(self.passengers.len());
        self.passengers.push(Passenger {
            name: name.into(),
            number,
            tier,
            balance,
        });
        Ok(id)
    }

    // ---- travel package ----

    pub fn add_destination(&mut self, destination: DestinationId) -> Result<()> {
        let name = &self.destination(destination)?.name;
        tracing::debug!("Adding {} to itinerary of {}", name, self.package.name);
        self.package.itinerary.push(destination);
        Ok(())
    }

    /// Adds a passenger to the package while it still has room.
    pub fn add_passenger(&mut self, passenger: PassengerId) -> Result<()> {
        let name = self.passenger(passenger)?.name.clone();

        if self.package.passengers.contains(&passenger) {
            return Err(self.reject(BookingError::AlreadyInPackage {
                passenger: name,
                package: self.package.name.clone(),
            }));
        }
        if self.package.is_full() {
            return Err(self.reject(BookingError::PackageFull {
                passenger: name,
                package: self.package.name.clone(),
            }));
        }

        self.package.passengers.push(passenger);
        let line = format!("{} added to {}", name, self.package.name);
        self.reporter.line(&line);
        Ok(())
    }

    // ---- enrollment ----

    /// Signs a passenger up for an activity, charging the tier price.
    ///
    /// Capacity is checked before funds; a rejected signup leaves balance and
    /// rosters untouched.
    pub fn sign_up_for_activity(
        &mut self,
        passenger: PassengerId,
        activity: ActivityId,
    ) -> Result<SignUp> {
        let (passenger_name, tier, balance) = {
            let p = self.passenger(passenger)?;
            (p.name.clone(), p.tier, p.balance)
        };
        let (activity_name, cost) = {
            let a = self.activity(activity)?;
            (a.name.clone(), a.cost)
        };

        if let Some(err) = self.roster_rejection(passenger, activity) {
            return Err(self.reject(err));
        }

        let price = price_for(tier, cost);
        let outcome = if tier.tracks_balance() {
            let Some(remaining) = balance.checked_sub(price) else {
                return Err(self.reject(BookingError::InsufficientBalance {
                    passenger: passenger_name,
                    activity: activity_name,
                    required: price,
                    available: balance,
                }));
            };
            self.passengers[passenger.index()].balance = remaining;
            if tier == Tier::Gold {
                SignUp::Discounted {
                    charged: price,
                    balance: remaining,
                }
            } else {
                SignUp::FullPrice {
                    charged: price,
                    balance: remaining,
                }
            }
        } else {
            SignUp::Premium
        };

        self.enrollments.push(Enrollment {
            passenger,
            activity,
            charged: price,
        });

        let line = match outcome {
            SignUp::FullPrice { .. } => format!("{} signed up for {}", passenger_name, activity_name),
            SignUp::Discounted { .. } => format!(
                "{} signed up for {} with {}% discount",
                passenger_name, activity_name, GOLD_DISCOUNT_PERCENT
            ),
            SignUp::Premium => format!(
                "{} signed up for {} as a premium passenger",
                passenger_name, activity_name
            ),
        };
        self.reporter.line(&line);
        tracing::debug!("{} charged {} for {}", passenger_name, price, activity_name);

        Ok(outcome)
    }

    /// Puts a passenger on an activity roster without charging them.
    pub fn add_passenger_to_activity(
        &mut self,
        passenger: PassengerId,
        activity: ActivityId,
    ) -> Result<()> {
        let passenger_name = self.passenger(passenger)?.name.clone();
        let activity_name = self.activity(activity)?.name.clone();

        if let Some(err) = self.roster_rejection(passenger, activity) {
            return Err(self.reject(err));
        }

        self.enrollments.push(Enrollment {
            passenger,
            activity,
            charged: Money::ZERO,
        });
        let line = format!("{} signed up for {}", passenger_name, activity_name);
        self.reporter.line(&line);
        Ok(())
    }

    fn roster_rejection(&self, passenger: PassengerId, activity: ActivityId) -> Option<BookingError> {
        let a = &self.activities[activity.index()];
        if self.is_enrolled(passenger, activity) {
            return Some(BookingError::AlreadyEnrolled {
                passenger: self.passengers[passenger.index()].name.clone(),
                activity: a.name.clone(),
            });
        }
        if self.enrolled_count(activity) >= a.capacity {
            return Some(BookingError::ActivityFull {
                activity: a.name.clone(),
                destination: self.destinations[a.destination.index()].name.clone(),
            });
        }
        None
    }

    fn reject(&mut self, err: BookingError) -> BookingError {
        tracing::debug!("Rejected: {}", err);
        self.reporter.line(&err.to_string());
        err
    }

    // ---- lookups and derived views ----

    pub fn passenger(&self, id: PassengerId) -> Result<&Passenger> {
        self.passengers
            .get(id.index())
            .ok_or(BookingError::UnknownPassenger(id))
    }

    pub fn activity(&self, id: ActivityId) -> Result<&Activity> {
        self.activities
            .get(id.index())
            .ok_or(BookingError::UnknownActivity(id))
    }

    pub fn destination(&self, id: DestinationId) -> Result<&Destination> {
        self.destinations
            .get(id.index())
            .ok_or(BookingError::UnknownDestination(id))
    }

    pub fn find_passenger(&self, number: u32) -> Option<PassengerId> {
        self.passengers
            .iter()
            .position(|p| p.number == number)
            .map(PassengerId::new)
    }

    pub fn find_activity(&self, name: &str) -> Option<ActivityId> {
        self.activities
            .iter()
            .position(|a| a.name == name)
            .map(ActivityId::new)
    }

    pub fn find_destination(&self, name: &str) -> Option<DestinationId> {
        self.destinations
            .iter()
            .position(|d| d.name == name)
            .map(DestinationId::new)
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn is_enrolled(&self, passenger: PassengerId, activity: ActivityId) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.passenger == passenger && e.activity == activity)
    }

    /// Activities the passenger is signed up for, in signup order.
    pub fn activities_of(&self, passenger: PassengerId) -> impl Iterator<Item = ActivityId> + '_ {
        self.enrollments
            .iter()
            .filter(move |e| e.passenger == passenger)
            .map(|e| e.activity)
    }

    /// Roster of an activity, in signup order.
    pub fn passengers_of(&self, activity: ActivityId) -> impl Iterator<Item = PassengerId> + '_ {
        self.enrollments
            .iter()
            .filter(move |e| e.activity == activity)
            .map(|e| e.passenger)
    }

    pub fn enrolled_count(&self, activity: ActivityId) -> usize {
        self.passengers_of(activity).count()
    }

    pub fn remaining_capacity(&self, activity: ActivityId) -> Result<usize> {
        let capacity = self.activity(activity)?.capacity;
        Ok(capacity.saturating_sub(self.enrolled_count(activity)))
    }
}

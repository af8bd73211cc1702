use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::Id;
use crate::validation::{self, DEFAULT_SEATS};

fn default_seats() -> i32 {
    DEFAULT_SEATS
}

/// Someone on the roster, with the constraints they ride under.
///
/// `blocked_with` and `is_driving_self_only` default when absent so that
/// rosters saved before those fields existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Id<Person>,
    pub name: String,
    pub has_license: bool,
    #[serde(default = "default_seats")]
    pub seats: i32,
    /// Drivers this person refuses to ride with.
    #[serde(default)]
    pub blocked_with: BTreeSet<Id<Person>>,
    /// Preferred driver. Never a member of `blocked_with`.
    #[serde(default)]
    pub must_ride_with: Option<Id<Person>>,
    pub is_driving_today: bool,
    pub is_going_today: bool,
    #[serde(default)]
    pub is_driving_self_only: bool,
}

impl Person {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            has_license: false,
            seats: DEFAULT_SEATS,
            blocked_with: BTreeSet::new(),
            must_ride_with: None,
            is_driving_today: false,
            is_going_today: false,
            is_driving_self_only: false,
        }
    }

    /// Licensed and driving on this trip.
    pub fn is_driver_today(&self) -> bool {
        self.is_driving_today && self.has_license
    }

    /// Going on this trip and needs a seat in someone else's car.
    pub fn is_passenger_today(&self) -> bool {
        self.is_going_today && !self.is_driver_today()
    }

    /// Seats this person offers when driving. Self-only drivers offer none.
    pub fn effective_capacity(&self) -> u32 {
        if self.is_driving_self_only {
            0
        } else {
            validation::capacity_from_seats(self.seats)
        }
    }

    pub fn blocks(&self, driver_id: Id<Person>) -> bool {
        self.blocked_with.contains(&driver_id)
    }

    /// Drops a preferred driver that has since been blocked.
    pub fn reconcile_preference(&mut self) {
        if let Some(driver_id) = self.must_ride_with {
            if self.blocks(driver_id) {
                self.must_ride_with = None;
            }
        }
    }
}

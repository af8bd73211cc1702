use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::person::Person;
use crate::error::OrganizeWarning;

/// One car: a driver and the passengers seated with them.
///
/// `seats_left` always equals the driver's effective capacity minus the
/// number of passengers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub driver: Person,
    pub passengers: Vec<Person>,
    pub seats_left: u32,
}

impl Group {
    pub fn new(driver: Person) -> Self {
        let seats_left = driver.effective_capacity();
        Self {
            driver,
            passengers: Vec::new(),
            seats_left,
        }
    }

    pub fn has_room(&self) -> bool {
        self.seats_left > 0
    }

    /// Free seats match the driver's capacity less the passengers seated.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.seats_left) + self.passengers.len() as u64
            == u64::from(self.driver.effective_capacity())
    }

    pub fn contains(&self, passenger_id: Id<Person>) -> bool {
        self.passengers.iter().any(|p| p.id == passenger_id)
    }

    /// Seats `passenger` if there is room. Hands the passenger back otherwise.
    pub(crate) fn seat(&mut self, passenger: Person) -> Result<(), Person> {
        if !self.has_room() {
            return Err(passenger);
        }
        self.passengers.push(passenger);
        self.seats_left -= 1;
        Ok(())
    }

    /// Removes a passenger and frees their seat.
    pub(crate) fn unseat(&mut self, passenger_id: Id<Person>) -> Option<Person> {
        let index = self.passengers.iter().position(|p| p.id == passenger_id)?;
        self.seats_left += 1;
        Some(self.passengers.remove(index))
    }
}

/// The outcome of one organize run, adjusted in place by manual moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub groups: Vec<Group>,
    pub left_out: Vec<Person>,
}

impl Assignment {
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn is_consistent(&self) -> bool {
        self.groups.iter().all(Group::is_consistent)
    }

    pub fn seated_count(&self) -> usize {
        self.groups.iter().map(|g| g.passengers.len()).sum()
    }
}

/// A successful organize run plus any advisory it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organized {
    pub assignment: Assignment,
    pub warning: Option<OrganizeWarning>,
}

/// Where a manual move sends a passenger. Groups are addressed by their
/// position in the current `Assignment::groups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Group(usize),
    Unassigned,
}

/// Result of a manual move. Anything but `Moved` left the assignment
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    PassengerNotFound,
    GroupNotFound,
    DestinationFull,
    SameGroup,
    NoAssignment,
}

impl MoveOutcome {
    pub fn is_moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

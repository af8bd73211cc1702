use crate::model::{Assignment, Id, Person};

/// Where a passenger currently sits in an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    InGroup(usize),
    LeftOut,
}

pub fn locate_passenger(assignment: &Assignment, passenger_id: Id<Person>) -> Option<Placement> {
    if let Some(index) = assignment.groups.iter().position(|g| g.contains(passenger_id)) {
        return Some(Placement::InGroup(index));
    }
    assignment
        .left_out
        .iter()
        .any(|p| p.id == passenger_id)
        .then_some(Placement::LeftOut)
}

/// Current position of the car driven by `driver_id`. Positions are what
/// the move operations take.
pub fn group_index_for_driver(assignment: &Assignment, driver_id: Id<Person>) -> Option<usize> {
    assignment.groups.iter().position(|g| g.driver.id == driver_id)
}

/// Total free seats across all cars.
pub fn seats_left(assignment: &Assignment) -> u64 {
    assignment
        .groups
        .iter()
        .map(|g| u64::from(g.seats_left))
        .fold(0, u64::saturating_add)
}

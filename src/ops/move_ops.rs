use tracing::debug;

use crate::model::{Assignment, Destination, Id, MoveOutcome, Person};

/// Moves a seated passenger to another car or out to the unassigned pool.
///
/// Blocklists and preferences are not consulted; only seat counts decide.
pub fn move_passenger(
    assignment: &mut Assignment,
    passenger_id: Id<Person>,
    from: usize,
    to: Destination,
) -> MoveOutcome {
    let outcome = try_move(assignment, passenger_id, from, to);
    debug!(%passenger_id, from, ?to, ?outcome, "move passenger");
    outcome
}

fn try_move(
    assignment: &mut Assignment,
    passenger_id: Id<Person>,
    from: usize,
    to: Destination,
) -> MoveOutcome {
    let Some(source) = assignment.groups.get(from) else {
        return MoveOutcome::GroupNotFound;
    };
    if !source.contains(passenger_id) {
        return MoveOutcome::PassengerNotFound;
    }

    let to = match to {
        Destination::Unassigned => {
            if let Some(passenger) = assignment.groups[from].unseat(passenger_id) {
                assignment.left_out.push(passenger);
            }
            return MoveOutcome::Moved;
        }
        Destination::Group(to) => to,
    };

    if to == from {
        return MoveOutcome::SameGroup;
    }
    match assignment.groups.get(to) {
        None => return MoveOutcome::GroupNotFound,
        Some(target) if !target.has_room() => return MoveOutcome::DestinationFull,
        Some(_) => {}
    }

    let Some(passenger) = assignment.groups[from].unseat(passenger_id) else {
        return MoveOutcome::PassengerNotFound;
    };
    match assignment.groups[to].seat(passenger) {
        Ok(()) => MoveOutcome::Moved,
        Err(passenger) => {
            let source = &mut assignment.groups[from];
            source.passengers.push(passenger);
            source.seats_left -= 1;
            MoveOutcome::DestinationFull
        }
    }
}

/// Seats someone from the unassigned pool in the car at `to`.
pub fn move_from_left_out(
    assignment: &mut Assignment,
    passenger_id: Id<Person>,
    to: usize,
) -> MoveOutcome {
    let outcome = try_move_from_left_out(assignment, passenger_id, to);
    debug!(%passenger_id, to, ?outcome, "move from left out");
    outcome
}

fn try_move_from_left_out(
    assignment: &mut Assignment,
    passenger_id: Id<Person>,
    to: usize,
) -> MoveOutcome {
    let Some(index) = assignment.left_out.iter().position(|p| p.id == passenger_id) else {
        return MoveOutcome::PassengerNotFound;
    };
    let Some(target) = assignment.groups.get_mut(to) else {
        return MoveOutcome::GroupNotFound;
    };
    if !target.has_room() {
        return MoveOutcome::DestinationFull;
    }

    let passenger = assignment.left_out.remove(index);
    match target.seat(passenger) {
        Ok(()) => MoveOutcome::Moved,
        Err(passenger) => {
            assignment.left_out.insert(index, passenger);
            MoveOutcome::DestinationFull
        }
    }
}

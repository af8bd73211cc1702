use tracing::{debug, info, warn};

use crate::error::{OrganizeError, OrganizeWarning};
use crate::model::{Assignment, Group, Organized, Person};
use crate::queries::roster_queries;

/// Builds a fresh assignment from a roster snapshot.
///
/// Passengers with a preferred driver are seated first; everyone else then
/// takes the first car with a free seat whose driver they have not blocked.
/// Both passes walk the roster in order, so earlier entries win scarce
/// seats. Passengers who fit nowhere end up in `left_out`.
pub fn organize(people: &[Person]) -> Result<Organized, OrganizeError> {
    let drivers: Vec<&Person> = roster_queries::drivers_today(people).collect();
    let passengers: Vec<&Person> = roster_queries::passengers_today(people).collect();

    if drivers.is_empty() {
        info!(passengers = passengers.len(), "no drivers available");
        return Err(OrganizeError::NoDriversAvailable);
    }

    let seats = roster_queries::total_capacity(people);
    debug!(
        drivers = drivers.len(),
        passengers = passengers.len(),
        seats,
        "organizing carpool"
    );

    let warning = if passengers.len() as u64 > seats {
        warn!(passengers = passengers.len(), seats, "not enough seats");
        Some(OrganizeWarning::InsufficientSeats {
            passengers: passengers.len(),
            seats,
        })
    } else {
        None
    };

    let mut groups: Vec<Group> = drivers.into_iter().cloned().map(Group::new).collect();

    let waiting: Vec<&Person> = passengers
        .into_iter()
        .filter(|p| !seat_with_preferred(&mut groups, p))
        .collect();

    let mut left_out = Vec::new();
    for passenger in waiting {
        let open = groups
            .iter_mut()
            .find(|g| g.has_room() && !passenger.blocks(g.driver.id));
        match open {
            Some(group) => {
                if let Err(p) = group.seat(passenger.clone()) {
                    left_out.push(p);
                }
            }
            None => left_out.push(passenger.clone()),
        }
    }

    groups.retain(|g| !g.passengers.is_empty() || g.driver.is_going_today);

    let assignment = Assignment { groups, left_out };
    info!(
        groups = assignment.groups.len(),
        seated = assignment.seated_count(),
        left_out = assignment.left_out.len(),
        "carpool organized"
    );

    Ok(Organized { assignment, warning })
}

/// Seats a passenger with their preferred driver if that car is running,
/// has room, and the driver is not also on their blocklist.
fn seat_with_preferred(groups: &mut [Group], passenger: &Person) -> bool {
    let Some(driver_id) = passenger.must_ride_with else {
        return false;
    };
    if passenger.blocks(driver_id) {
        return false;
    }

    groups
        .iter_mut()
        .find(|g| g.driver.id == driver_id)
        .is_some_and(|g| g.seat(passenger.clone()).is_ok())
}

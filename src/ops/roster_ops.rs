use std::collections::BTreeSet;

use crate::error::{CarpoolError, CarpoolResult};
use crate::model::{Id, Person, Roster};
use crate::validation;

/// The typed form of a single-field edit on a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonUpdate {
    Name(String),
    HasLicense(bool),
    Seats(i32),
    BlockedWith(BTreeSet<Id<Person>>),
    MustRideWith(Option<Id<Person>>),
    IsDrivingToday(bool),
    IsGoingToday(bool),
    IsDrivingSelfOnly(bool),
}

fn not_found(id: Id<Person>) -> CarpoolError {
    CarpoolError::NotFound {
        entity_type: "Person".into(),
        id: id.to_string(),
    }
}

/// Adds a person to the front of the roster. A blank name is ignored and
/// yields `None`.
pub fn add_person(roster: &mut Roster, name: &str) -> Option<Id<Person>> {
    let valid_name = validation::non_blank(name, "name").ok()?;
    let person = Person::create(valid_name);
    let id = person.id;
    roster.people.insert(0, person);
    Some(id)
}

/// Removes a person. Preferences elsewhere that point at them are left as
/// they are; allocation treats such a driver as unavailable.
pub fn remove_person(roster: &mut Roster, id: Id<Person>) -> Option<Person> {
    let index = roster.people.iter().position(|p| p.id == id)?;
    Some(roster.people.remove(index))
}

pub fn update_person(
    roster: &mut Roster,
    id: Id<Person>,
    update: PersonUpdate,
) -> CarpoolResult<&Person> {
    let person = roster.get_mut(id).ok_or_else(|| not_found(id))?;

    match update {
        PersonUpdate::Name(name) => person.name = validation::non_blank(&name, "name")?,
        PersonUpdate::HasLicense(v) => person.has_license = v,
        PersonUpdate::Seats(n) => person.seats = validation::seat_count(n),
        PersonUpdate::BlockedWith(set) => person.blocked_with = set,
        PersonUpdate::MustRideWith(driver) => person.must_ride_with = driver,
        PersonUpdate::IsDrivingToday(v) => person.is_driving_today = v,
        PersonUpdate::IsGoingToday(v) => person.is_going_today = v,
        PersonUpdate::IsDrivingSelfOnly(v) => person.is_driving_self_only = v,
    }

    person.reconcile_preference();
    Ok(&*person)
}

/// Blocks `driver_id` for `id`, or unblocks it if already blocked.
pub fn toggle_block(
    roster: &mut Roster,
    id: Id<Person>,
    driver_id: Id<Person>,
) -> CarpoolResult<&Person> {
    let person = roster.get_mut(id).ok_or_else(|| not_found(id))?;

    if !person.blocked_with.remove(&driver_id) {
        person.blocked_with.insert(driver_id);
    }

    person.reconcile_preference();
    Ok(&*person)
}

/// Clears every per-trip flag so the next trip starts from scratch.
pub fn reset_today(roster: &mut Roster) {
    for person in &mut roster.people {
        person.is_going_today = false;
        person.is_driving_today = false;
        person.is_driving_self_only = false;
    }
}

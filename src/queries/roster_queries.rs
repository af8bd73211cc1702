use crate::model::{Id, Person, Roster};

/// Licensed and driving today, in roster order.
pub fn drivers_today(people: &[Person]) -> impl Iterator<Item = &Person> {
    people.iter().filter(|p| p.is_driver_today())
}

/// Everyone marked as going today, drivers included.
pub fn going_today(people: &[Person]) -> impl Iterator<Item = &Person> {
    people.iter().filter(|p| p.is_going_today)
}

/// Going today and not driving, in roster order.
pub fn passengers_today(people: &[Person]) -> impl Iterator<Item = &Person> {
    people.iter().filter(|p| p.is_passenger_today())
}

/// Seats offered by today's drivers. Self-only drivers add nothing.
pub fn total_capacity(people: &[Person]) -> u64 {
    drivers_today(people)
        .map(|d| u64::from(d.effective_capacity()))
        .fold(0, u64::saturating_add)
}

pub fn licensed_people(people: &[Person]) -> impl Iterator<Item = &Person> {
    people.iter().filter(|p| p.has_license)
}

/// Drivers `person_id` could block: every licensed person except themself.
pub fn block_choices(roster: &Roster, person_id: Id<Person>) -> Vec<&Person> {
    licensed_people(roster.people())
        .filter(|d| d.id != person_id)
        .collect()
}

/// Drivers `person_id` may prefer: block choices they have not blocked.
pub fn preference_choices(roster: &Roster, person_id: Id<Person>) -> Vec<&Person> {
    let Some(person) = roster.get(person_id) else {
        return Vec::new();
    };
    block_choices(roster, person_id)
        .into_iter()
        .filter(|d| !person.blocks(d.id))
        .collect()
}

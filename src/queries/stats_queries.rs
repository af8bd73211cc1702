use crate::model::Roster;
use crate::queries::roster_queries;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub total_people: usize,
    pub licensed: usize,
    pub going_today: usize,
    /// Licensed people driving today.
    pub driving_today: usize,
    pub passengers_today: usize,
    pub seats_today: u64,
}

impl RosterStats {
    /// Passengers exceed the seats on offer.
    pub fn short_of_seats(&self) -> bool {
        self.passengers_today as u64 > self.seats_today
    }
}

pub fn roster_stats(roster: &Roster) -> RosterStats {
    let people = roster.people();
    RosterStats {
        total_people: people.len(),
        licensed: roster_queries::licensed_people(people).count(),
        going_today: roster_queries::going_today(people).count(),
        driving_today: roster_queries::drivers_today(people).count(),
        passengers_today: roster_queries::passengers_today(people).count(),
        seats_today: roster_queries::total_capacity(people),
    }
}

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::{assignment_repo, person_repo};
use crate::error::{CarpoolResult, OrganizeError, OrganizeWarning};
use crate::model::{Assignment, Destination, Id, MoveOutcome, Person, Roster};
use crate::ops::{move_ops, organize_ops};

/// One organizer's state: the roster and the assignment last computed
/// from it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub roster: Roster,
    assignment: Option<Assignment>,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            assignment: None,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Recomputes the assignment from the current roster, replacing the
    /// previous one. On failure the previous assignment is dropped too.
    pub fn organize(&mut self) -> Result<Option<OrganizeWarning>, OrganizeError> {
        match organize_ops::organize(self.roster.people()) {
            Ok(organized) => {
                self.assignment = Some(organized.assignment);
                Ok(organized.warning)
            }
            Err(e) => {
                self.assignment = None;
                Err(e)
            }
        }
    }

    pub fn move_passenger(
        &mut self,
        passenger_id: Id<Person>,
        from: usize,
        to: Destination,
    ) -> MoveOutcome {
        match self.assignment.as_mut() {
            Some(a) => move_ops::move_passenger(a, passenger_id, from, to),
            None => MoveOutcome::NoAssignment,
        }
    }

    pub fn move_from_left_out(&mut self, passenger_id: Id<Person>, to: usize) -> MoveOutcome {
        match self.assignment.as_mut() {
            Some(a) => move_ops::move_from_left_out(a, passenger_id, to),
            None => MoveOutcome::NoAssignment,
        }
    }

    /// Restores a session. A roster that cannot be read comes back empty
    /// rather than failing.
    pub fn load(conn: &Connection) -> CarpoolResult<Self> {
        let roster = match person_repo::load_roster(conn) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "stored roster unreadable, starting empty");
                Roster::new()
            }
        };
        let assignment = assignment_repo::load(conn)?.map(|s| s.assignment);
        debug!(
            people = roster.len(),
            has_assignment = assignment.is_some(),
            "session loaded"
        );
        Ok(Self { roster, assignment })
    }

    pub fn save(&self, conn: &Connection) -> CarpoolResult<()> {
        person_repo::save_roster(conn, &self.roster)?;
        match &self.assignment {
            Some(a) => assignment_repo::save(conn, a),
            None => assignment_repo::clear(conn),
        }
    }
}

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use crate::error::CarpoolResult;
use crate::model::Assignment;

/// A stored assignment and when it was written.
#[derive(Debug, Clone)]
pub struct AssignmentSnapshot {
    pub assignment: Assignment,
    pub saved_at: DateTime<Utc>,
}

pub fn save(conn: &Connection, assignment: &Assignment) -> CarpoolResult<()> {
    let payload = serde_json::to_string(assignment)?;
    conn.execute(
        "INSERT INTO assignment_snapshot (slot, payload, saved_at) VALUES (1, ?1, ?2)
         ON CONFLICT(slot) DO UPDATE SET payload = excluded.payload, saved_at = excluded.saved_at",
        params![payload, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Loads the stored assignment. A payload that no longer parses, or whose
/// seat counts disagree with its drivers' capacity, is treated as absent.
pub fn load(conn: &Connection) -> CarpoolResult<Option<AssignmentSnapshot>> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT payload, saved_at FROM assignment_snapshot WHERE slot = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let Some((payload, saved_at)) = row else {
        return Ok(None);
    };

    let assignment = match serde_json::from_str::<Assignment>(&payload) {
        Ok(a) => a,
        Err(e) => {
            warn!(error = %e, "discarding unreadable assignment snapshot");
            return Ok(None);
        }
    };
    if !assignment.is_consistent() {
        warn!("discarding assignment snapshot with mismatched seat counts");
        return Ok(None);
    }
    let saved_at = DateTime::parse_from_rfc3339(&saved_at)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(Some(AssignmentSnapshot {
        assignment,
        saved_at,
    }))
}

pub fn clear(conn: &Connection) -> CarpoolResult<()> {
    conn.execute("DELETE FROM assignment_snapshot", [])?;
    Ok(())
}

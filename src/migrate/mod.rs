use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;
use tracing::{info, warn};

use crate::db::person_repo;
use crate::error::{CarpoolError, CarpoolResult};
use crate::model::{Id, Person, Roster};
use crate::validation::{self, DEFAULT_SEATS};

/// Imports a browser-era roster export (a JSON array of people) into the
/// database, replacing the stored roster.
pub fn import_file(json_path: &Path, conn: &Connection) -> CarpoolResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let (roster, stats) = parse_roster(&json_str)?;
    person_repo::save_roster(conn, &roster)?;
    info!(people = stats.people, skipped = stats.skipped, "roster imported");
    Ok(stats)
}

/// Lenient form of [`parse_roster`]: unreadable input yields an empty roster.
pub fn import_roster_json(json: &str) -> Roster {
    match parse_roster(json) {
        Ok((roster, _)) => roster,
        Err(e) => {
            warn!(error = %e, "roster export unreadable, starting empty");
            Roster::new()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub people: usize,
    /// Entries without an id or a usable name, or repeating an earlier id.
    pub skipped: usize,
    /// Block and preference references to people not in the export.
    pub dropped_references: usize,
}

/// Parses an export. Exported ids may be numbers or strings; ids that are
/// not UUIDs are replaced by fresh ones, consistently across references.
/// A legacy `allowedWith` field is ignored.
pub fn parse_roster(json: &str) -> CarpoolResult<(Roster, ImportStats)> {
    let value: Value = serde_json::from_str(json)?;
    let entries = value
        .as_array()
        .ok_or_else(|| CarpoolError::Other("Roster export must be a JSON array".into()))?;

    let mut stats = ImportStats::default();
    let mut ids: HashMap<String, Id<Person>> = HashMap::new();
    let mut accepted: Vec<(Id<Person>, &Value)> = Vec::new();

    for entry in entries {
        let Some(key) = foreign_key(&entry["id"]) else {
            stats.skipped += 1;
            continue;
        };
        let named = entry["name"].as_str().is_some_and(|n| !n.trim().is_empty());
        if !named || ids.contains_key(&key) {
            stats.skipped += 1;
            continue;
        }
        let id = Id::parse(&key).unwrap_or_else(|_| Id::generate());
        ids.insert(key, id);
        accepted.push((id, entry));
    }

    let mut people = Vec::with_capacity(accepted.len());
    for (id, entry) in accepted {
        let person = parse_person(id, entry, &ids, &mut stats)?;
        people.push(person);
    }
    stats.people = people.len();

    Ok((Roster::from_people(people), stats))
}

fn foreign_key(val: &Value) -> Option<String> {
    match val {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn resolve(
    val: &Value,
    ids: &HashMap<String, Id<Person>>,
    stats: &mut ImportStats,
) -> Option<Id<Person>> {
    let key = foreign_key(val)?;
    let id = ids.get(&key).copied();
    if id.is_none() {
        stats.dropped_references += 1;
    }
    id
}

fn parse_person(
    id: Id<Person>,
    val: &Value,
    ids: &HashMap<String, Id<Person>>,
    stats: &mut ImportStats,
) -> CarpoolResult<Person> {
    let name = validation::non_blank(val["name"].as_str().unwrap_or(""), "name")?;

    let blocked_with: BTreeSet<Id<Person>> = match &val["blockedWith"] {
        Value::Array(arr) => arr.iter().filter_map(|v| resolve(v, ids, stats)).collect(),
        _ => BTreeSet::new(),
    };

    let seats = val["seats"]
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(DEFAULT_SEATS);

    let mut person = Person {
        id,
        name,
        has_license: val["hasLicense"].as_bool().unwrap_or(false),
        seats,
        blocked_with,
        must_ride_with: resolve(&val["mustRideWith"], ids, stats),
        is_driving_today: val["isDrivingToday"].as_bool().unwrap_or(false),
        is_going_today: val["isGoingToday"].as_bool().unwrap_or(false),
        is_driving_self_only: val["isDrivingSelfOnly"].as_bool().unwrap_or(false),
    };
    person.reconcile_preference();
    Ok(person)
}

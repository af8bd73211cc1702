use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{CarpoolError, CarpoolResult};
use crate::model::{Id, Person, Roster};

/// Replaces the stored roster with `roster`, keeping its order.
pub fn save_roster(conn: &Connection, roster: &Roster) -> CarpoolResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM person_blocks", [])?;
    tx.execute("DELETE FROM people", [])?;

    for (position, person) in roster.iter().enumerate() {
        insert(&tx, position, person)?;
    }

    tx.commit()?;
    Ok(())
}

fn insert(conn: &Connection, position: usize, person: &Person) -> CarpoolResult<()> {
    conn.execute(
        "INSERT INTO people (id, position, name, has_license, seats, must_ride_with,
         is_driving_today, is_going_today, is_driving_self_only)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            person.id.value.to_string(),
            position as i64,
            person.name,
            person.has_license as i32,
            person.seats,
            person.must_ride_with.map(|d| d.value.to_string()),
            person.is_driving_today as i32,
            person.is_going_today as i32,
            person.is_driving_self_only as i32,
        ],
    )?;

    for driver_id in &person.blocked_with {
        conn.execute(
            "INSERT OR IGNORE INTO person_blocks (person_id, driver_id) VALUES (?1, ?2)",
            params![person.id.value.to_string(), driver_id.value.to_string()],
        )?;
    }

    Ok(())
}

pub fn load_roster(conn: &Connection) -> CarpoolResult<Roster> {
    let mut stmt = conn.prepare(
        "SELECT id, name, has_license, seats, must_ride_with,
                is_driving_today, is_going_today, is_driving_self_only
         FROM people ORDER BY position",
    )?;

    let mut people = stmt
        .query_map([], |row| Ok(row_to_person(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    for person in &mut people {
        person.blocked_with = find_blocks(conn, person.id)?;
    }

    Ok(Roster::from_people(people))
}

pub fn find_by_id(conn: &Connection, id: Id<Person>) -> CarpoolResult<Option<Person>> {
    let person = conn
        .query_row(
            "SELECT id, name, has_license, seats, must_ride_with,
                    is_driving_today, is_going_today, is_driving_self_only
             FROM people WHERE id = ?1",
            params![id.value.to_string()],
            |row| Ok(row_to_person(row)),
        )
        .optional()?
        .transpose()?;

    match person {
        Some(mut p) => {
            p.blocked_with = find_blocks(conn, p.id)?;
            Ok(Some(p))
        }
        None => Ok(None),
    }
}

pub fn count(conn: &Connection) -> CarpoolResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn find_blocks(conn: &Connection, person_id: Id<Person>) -> CarpoolResult<BTreeSet<Id<Person>>> {
    let mut stmt = conn.prepare("SELECT driver_id FROM person_blocks WHERE person_id = ?1")?;
    let ids = stmt
        .query_map(params![person_id.value.to_string()], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    ids.iter().map(|s| parse_id(s)).collect()
}

fn parse_id(s: &str) -> CarpoolResult<Id<Person>> {
    Id::parse(s).map_err(|e| CarpoolError::Other(format!("Invalid UUID: {}", e)))
}

fn row_to_person(row: &rusqlite::Row) -> CarpoolResult<Person> {
    let id_str: String = row.get(0)?;
    let must_ride_with: Option<String> = row.get(4)?;
    let self_only: Option<i32> = row.get(7)?;

    Ok(Person {
        id: parse_id(&id_str)?,
        name: row.get(1)?,
        has_license: row.get::<_, i32>(2)? != 0,
        seats: row.get(3)?,
        blocked_with: BTreeSet::new(),
        must_ride_with: must_ride_with.as_deref().map(parse_id).transpose()?,
        is_driving_today: row.get::<_, i32>(5)? != 0,
        is_going_today: row.get::<_, i32>(6)? != 0,
        is_driving_self_only: self_only.unwrap_or(0) != 0,
    })
}

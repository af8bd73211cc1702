use carpool::migrate;
use carpool::model::*;
use carpool::ops::organize_ops;

const BROWSER_EXPORT: &str = r#"[
    {"id": 1700000000003, "name": "Bob", "hasLicense": false, "seats": 4,
     "blockedWith": [1700000000002], "mustRideWith": 1700000000001,
     "isDrivingToday": false, "isGoingToday": true},
    {"id": 1700000000002, "name": "Dave", "hasLicense": true, "seats": 1,
     "mustRideWith": null, "isDrivingToday": true, "isGoingToday": true},
    {"id": 1700000000001, "name": "Alice", "hasLicense": true, "seats": 2,
     "allowedWith": [1700000000002], "mustRideWith": null,
     "isDrivingToday": true, "isGoingToday": true, "isDrivingSelfOnly": false}
]"#;

fn by_name<'a>(roster: &'a Roster, name: &str) -> &'a Person {
    roster.iter().find(|p| p.name == name).unwrap()
}

#[test]
fn numeric_ids_are_remapped_consistently() {
    let (roster, stats) = migrate::parse_roster(BROWSER_EXPORT).unwrap();
    assert_eq!(stats.people, 3);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.dropped_references, 0);

    let bob = by_name(&roster, "Bob");
    let dave = by_name(&roster, "Dave");
    let alice = by_name(&roster, "Alice");

    assert_eq!(bob.must_ride_with, Some(alice.id));
    assert!(bob.blocks(dave.id));
    assert!(alice.blocked_with.is_empty());
    assert!(!dave.is_driving_self_only);
}

#[test]
fn import_preserves_order() {
    let roster = migrate::import_roster_json(BROWSER_EXPORT);
    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Dave", "Alice"]);
}

#[test]
fn imported_roster_organizes() {
    let roster = migrate::import_roster_json(BROWSER_EXPORT);
    let a = organize_ops::organize(roster.people()).unwrap().assignment;

    assert_eq!(a.groups[0].driver.name, "Dave");
    assert_eq!(a.groups[1].driver.name, "Alice");
    assert_eq!(a.groups[1].passengers[0].name, "Bob");
}

#[test]
fn uuid_ids_are_kept() {
    let id = Id::<Person>::generate();
    let json = format!(r#"[{{"id": "{id}", "name": "Alice", "hasLicense": true}}]"#);
    let roster = migrate::import_roster_json(&json);
    assert_eq!(roster.people()[0].id, id);
    assert_eq!(roster.people()[0].seats, 4);
}

#[test]
fn unknown_references_are_dropped() {
    let json = r#"[
        {"id": 1, "name": "Bob", "blockedWith": [99], "mustRideWith": 42}
    ]"#;
    let (roster, stats) = migrate::parse_roster(json).unwrap();
    let bob = &roster.people()[0];
    assert!(bob.blocked_with.is_empty());
    assert_eq!(bob.must_ride_with, None);
    assert_eq!(stats.dropped_references, 2);
}

#[test]
fn blank_and_duplicate_entries_are_skipped() {
    let json = r#"[
        {"id": 1, "name": "Alice"},
        {"id": 2, "name": "   "},
        {"name": "No id"},
        {"id": 1, "name": "Alice again"}
    ]"#;
    let (roster, stats) = migrate::parse_roster(json).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(stats.skipped, 3);
}

#[test]
fn blocked_preference_is_cleared_on_import() {
    let json = r#"[
        {"id": 1, "name": "Alice", "hasLicense": true},
        {"id": 2, "name": "Bob", "blockedWith": [1], "mustRideWith": 1}
    ]"#;
    let roster = migrate::import_roster_json(json);
    let bob = by_name(&roster, "Bob");
    assert_eq!(bob.must_ride_with, None);
    assert_eq!(bob.blocked_with.len(), 1);
}

#[test]
fn malformed_export_yields_empty_roster() {
    assert!(migrate::import_roster_json("{ definitely not json").is_empty());
    assert!(migrate::import_roster_json(r#"{"people": []}"#).is_empty());
    assert!(migrate::parse_roster("[1, 2").is_err());
}

#[test]
fn import_file_writes_roster() {
    let dir = std::env::temp_dir().join(format!("carpool-import-{}", Id::<Person>::generate()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("people.json");
    std::fs::write(&path, BROWSER_EXPORT).unwrap();

    let conn = carpool::db::schema::test_connection();
    let stats = migrate::import_file(&path, &conn).unwrap();

    assert_eq!(stats.people, 3);
    assert_eq!(carpool::db::person_repo::count(&conn).unwrap(), 3);
    std::fs::remove_dir_all(&dir).unwrap();
}

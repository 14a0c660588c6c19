use habitgrid_core::db::{open_db, open_db_in_memory};
use habitgrid_core::{
    CompletionRecord, DayNote, HabitData, HabitStore, SqliteHabitStore, StoreError, STORAGE_KEY,
};
use rusqlite::params;

fn write_raw(conn: &rusqlite::Connection, value: &str) {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        params![STORAGE_KEY, value],
    )
    .unwrap();
}

#[test]
fn default_data_contains_starter_habits_only() {
    let data = HabitData::default_data();
    let names: Vec<&str> = data.habits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Exercise", "Read", "Meditate", "Water (8 glasses)", "Sleep 8h"]
    );
    assert_eq!(data.habits[0].id, "1");
    assert_eq!(data.habits[0].color, "#ef4444");
    assert!(data.completions.is_empty());
    assert!(data.notes.is_empty());
}

#[test]
fn saved_blob_uses_camel_case_wire_shape() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteHabitStore::new(&conn);

    let mut data = HabitData::default_data();
    data.completions
        .push(CompletionRecord::new("1", "2024-01-02".parse().unwrap(), true));
    data.notes.push(DayNote {
        date: "2024-01-02".parse().unwrap(),
        note: "felt great".to_string(),
    });
    store.save(&data).unwrap();

    let blob = store.read_blob().unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["habits"][1]["icon"], "📚");
    assert_eq!(json["completions"][0]["habitId"], "1");
    assert_eq!(json["completions"][0]["date"], "2024-01-02");
    assert_eq!(json["completions"][0]["completed"], true);
    assert_eq!(json["notes"][0]["note"], "felt great");

    assert_eq!(store.load(), data);
}

#[test]
fn malformed_blob_falls_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    write_raw(&conn, "{ not json");
    let store = SqliteHabitStore::new(&conn);

    assert!(matches!(store.try_load(), Err(StoreError::Json(_))));
    assert_eq!(store.load(), HabitData::default_data());
}

#[test]
fn invalid_date_key_in_blob_falls_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    write_raw(
        &conn,
        r#"{"habits":[],"completions":[{"habitId":"1","date":"01/02/2024","completed":true}],"notes":[]}"#,
    );
    let store = SqliteHabitStore::new(&conn);

    assert!(store.try_load().is_err());
    assert_eq!(store.load(), HabitData::default_data());
}

#[test]
fn duplicate_records_are_collapsed_on_load() {
    let conn = open_db_in_memory().unwrap();
    write_raw(
        &conn,
        r##"{
            "habits": [{"id":"1","name":"Exercise","color":"#ef4444","icon":"x"}],
            "completions": [
                {"habitId":"1","date":"2024-01-01","completed":false},
                {"habitId":"1","date":"2024-01-01","completed":true}
            ],
            "notes": []
        }"##,
    );
    let store = SqliteHabitStore::new(&conn);

    let data = store.load();
    assert_eq!(
        data.completions,
        vec![CompletionRecord::new("1", "2024-01-01".parse().unwrap(), true)]
    );
}

#[test]
fn missing_collections_default_to_empty() {
    let conn = open_db_in_memory().unwrap();
    write_raw(&conn, r#"{"habits":[]}"#);
    let store = SqliteHabitStore::new(&conn);

    let data = store.try_load().unwrap().unwrap();
    assert_eq!(data, HabitData::default());
}

#[test]
fn saved_data_survives_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habitgrid.db");

    let mut data = HabitData::default_data();
    data.completions
        .push(CompletionRecord::new("3", "2024-05-05".parse().unwrap(), true));
    {
        let conn = open_db(&path).unwrap();
        SqliteHabitStore::new(&conn).save(&data).unwrap();
        data.completions[0].completed = false;
        SqliteHabitStore::new(&conn).save(&data).unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(SqliteHabitStore::new(&conn).load(), data);
}

use diesel::prelude::*;
use diesel::sql_query;

mod common;

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModePragma {
    #[diesel(sql_type = diesel::sql_types::Text)]
    journal_mode: String,
}

#[test]
fn connections_come_with_the_expected_pragmas() {
    let test_db = common::TestDb::new("test_connection_pragmas.db");
    let pool = test_db.pool();
    let mut conn = pool.get().expect("connection");

    let fk = sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeysPragma>(&mut conn)
        .expect("foreign_keys pragma");
    assert_eq!(fk.foreign_keys, 1);

    let journal = sql_query("PRAGMA journal_mode")
        .get_result::<JournalModePragma>(&mut conn)
        .expect("journal_mode pragma");
    assert_eq!(journal.journal_mode.to_ascii_lowercase(), "wal");
}

#[test]
fn dropping_the_test_db_removes_its_files() {
    let base = "test_db_file_lifecycle.db";

    {
        let test_db = common::TestDb::new(base);
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        assert!(std::path::Path::new(base).exists());
    }

    assert!(!std::path::Path::new(base).exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}

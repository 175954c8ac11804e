use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Connection pool shared across request handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A single checked-out connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Enables the SQLite pragmas every connection relies on.
///
/// Foreign keys back the referential integrity of the cascade routines and
/// WAL keeps concurrent readers from blocking the writer.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds an r2d2 pool for the given SQLite database url or file path.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Builds the connection pool from `DATABASE_URL` (via .env when present),
/// falling back to a local SQLite file.
pub fn establish_pool() -> Result<DbPool, r2d2::Error> {
    dotenv::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://reviews.db".into());

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

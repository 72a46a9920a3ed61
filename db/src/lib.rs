pub mod models;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Opens one connection to `url`, which may be a DSN or a bare SQLite file path.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = common::config::connection_url(url);
    log::debug!("Connecting to {}", url);
    Database::connect(url).await
}

/// Applies any migrations the database has not seen yet.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every migration in order, printing one status line each.
///
/// Unlike `Migrator::up`, this does not consult the migration history table,
/// so it is only used against a fresh database.
pub async fn run_all_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    println!("Running migrations...");
    let schema_manager = SchemaManager::new(db);

    for migration in <crate::Migrator as MigratorTrait>::migrations() {
        run_migration(&schema_manager, migration).await?;
    }
    Ok(())
}

async fn run_migration(
    schema_manager: &SchemaManager<'_>,
    migration: Box<dyn MigrationTrait>,
) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(migration.up(schema_manager))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(err)
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(DbErr::Migration(format!(
                "migration {} panicked",
                migration.name()
            )))
        }
    }
}

use common::config::{self, Config};
use migration::{Migrator, runner};
use sea_orm_migration::MigratorTrait;
use std::{env, fs, path::Path};

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => remove_db_file(&config.database_url),
        Some("fresh") => {
            if let Err(err) = remove_db_file(&config.database_url) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
            fresh(&config.database_url).await
        }
        Some("up") | None => up(&config.database_url).await,
        Some(other) => Err(format!("Unknown command '{}'. Use up, fresh or clean.", other)),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Runs pending migrations, skipping those already recorded.
async fn up(url: &str) -> Result<(), String> {
    let db = connect(url).await?;
    Migrator::up(&db, None).await.map_err(|e| e.to_string())?;
    println!("Database is up to date.");
    db.close().await.map_err(|e| e.to_string())
}

async fn fresh(url: &str) -> Result<(), String> {
    let db = connect(url).await?;
    runner::run_all_migrations(&db).await.map_err(|e| e.to_string())?;
    db.close().await.map_err(|e| e.to_string())
}

async fn connect(url: &str) -> Result<sea_orm::DatabaseConnection, String> {
    sea_orm::Database::connect(config::connection_url(url))
        .await
        .map_err(|e| format!("DB connection failed: {}", e))
}

fn remove_db_file(url: &str) -> Result<(), String> {
    if !config::is_file_path(url) {
        return Err(format!(
            "Refusing to delete '{}': only plain SQLite file paths can be removed.",
            url
        ));
    }

    let db_path = Path::new(url);
    if db_path.exists() {
        fs::remove_file(db_path).map_err(|e| format!("Failed to delete DB file: {}", e))?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}

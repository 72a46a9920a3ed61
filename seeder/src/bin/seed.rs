use common::{config::Config, logger};
use futures::FutureExt;
use log::{error, info};
use seeder::{jobs, session, summary};

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    if let Err(err) = logger::init_logger(config) {
        eprintln!("Failed to initialise logging: {err}");
    }
    info!("{} started", config.project_name);

    println!("🌱 Seeding {}", config.database_url);
    match session::run_session(&config.database_url, |db| jobs::seed_database(db).boxed()).await {
        Ok(report) => summary::print_base(&report),
        Err(err) => {
            error!("Seeding failed: {err}");
            eprintln!("❌ Seeding failed: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

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

    println!("🎬 Adding video courses to {}", config.database_url);
    let result = session::run_session(&config.database_url, |db| {
        jobs::seed_courses_with_videos(db).boxed()
    })
    .await;

    match result {
        Ok(report) => summary::print_videos(&report),
        Err(err) => {
            error!("Seeding video courses failed: {err}");
            eprintln!("❌ {err}");
            std::process::exit(err.exit_code());
        }
    }
}

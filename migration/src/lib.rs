pub mod migrations;
mod migrator;
pub mod runner;

pub use migrator::Migrator;

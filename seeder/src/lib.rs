pub mod catalog;
pub mod error;
pub mod jobs;
pub mod seed;
pub mod seeds;
pub mod session;
pub mod summary;

pub use error::SeedError;

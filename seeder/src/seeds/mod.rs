pub mod course;
pub mod reset;
pub mod user;

pub mod course;
pub mod material;
pub mod module;
pub mod quiz;
pub mod user;

pub use course::Entity as Course;
pub use material::Entity as Material;
pub use module::Entity as Module;
pub use quiz::Entity as Quiz;
pub use user::Entity as User;

use sea_orm::{DbErr, FromJsonQueryResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ordered list of child row IDs kept on a parent row as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct IdList(pub Vec<i64>);

impl IdList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for IdList {
    fn from(ids: Vec<i64>) -> Self {
        IdList(ids)
    }
}

/// Runs `validator` checks and maps failures to `DbErr::Custom`.
pub(crate) fn validate<T: Validate>(value: &T) -> Result<(), DbErr> {
    value
        .validate()
        .map_err(|e| DbErr::Custom(common::format_validation_errors(&e)))
}

/// Checks that `ids` has no duplicates and that every id is in `owned`.
pub(crate) fn ensure_owned(ids: &[i64], owned: &[i64], what: &str, parent: &str) -> Result<(), DbErr> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DbErr::Custom(format!("{} {} listed twice", what, id)));
        }
        if !owned.contains(id) {
            return Err(DbErr::Custom(format!(
                "{} {} does not belong to {}",
                what, id, parent
            )));
        }
    }
    Ok(())
}

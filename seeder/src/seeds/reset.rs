use crate::error::SeedError;
use crate::seed::Seeder;
use db::models::{course, material, module, quiz, user};
use log::info;
use sea_orm::DatabaseConnection;
use std::pin::Pin;

/// Rows removed from each table by [`ResetSeeder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetCounts {
    pub users: u64,
    pub courses: u64,
    pub modules: u64,
    pub materials: u64,
    pub quizzes: u64,
}

impl ResetCounts {
    pub fn total(&self) -> u64 {
        self.users + self.courses + self.modules + self.materials + self.quizzes
    }
}

/// Empties every content table. Children go first so no foreign key is left
/// pointing at a deleted row.
pub struct ResetSeeder;

impl Seeder for ResetSeeder {
    type Output = ResetCounts;

    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<ResetCounts, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let quizzes = quiz::Model::delete_all(db).await?;
            let materials = material::Model::delete_all(db).await?;
            let modules = module::Model::delete_all(db).await?;
            let courses = course::Model::delete_all(db).await?;
            let users = user::Model::delete_all(db).await?;

            let counts = ResetCounts {
                users,
                courses,
                modules,
                materials,
                quizzes,
            };
            info!("Cleared {} existing rows ({:?})", counts.total(), counts);
            Ok(counts)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::run_seeder;
    use db::models::user::{NewUser, Role};
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn empty_store_reports_zero() {
        let db = setup_test_db().await;
        let counts = run_seeder(&ResetSeeder, "Reset", &db).await.unwrap();
        assert_eq!(counts, ResetCounts::default());
    }

    #[tokio::test]
    async fn removes_existing_users() {
        let db = setup_test_db().await;
        for email in ["a@example.com", "b@example.com"] {
            user::Model::create(&db, &NewUser::new("Someone", email, "password123", Role::Student))
                .await
                .unwrap();
        }

        let counts = run_seeder(&ResetSeeder, "Reset", &db).await.unwrap();
        assert_eq!(counts.users, 2);
        assert_eq!(user::Model::count(&db).await.unwrap(), 0);
    }
}

use crate::error::SeedError;
use crate::seed::Seeder;
use db::models::user::{Model, NewUser};
use log::info;
use sea_orm::DatabaseConnection;
use std::pin::Pin;

pub struct UserSeeder {
    users: Vec<NewUser>,
}

impl UserSeeder {
    pub fn new(users: Vec<NewUser>) -> Self {
        Self { users }
    }
}

impl Seeder for UserSeeder {
    type Output = Vec<Model>;

    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Model>, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let mut created = Vec::with_capacity(self.users.len());
            for new_user in &self.users {
                let user = Model::create(db, new_user).await?;
                info!("User created: {} <{}> as {}", user.name, user.email, user.role);
                created.push(user);
            }
            Ok(created)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::run_seeder;
    use db::models::user::Role;
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn creates_users_in_order() {
        let db = setup_test_db().await;
        let seeder = UserSeeder::new(vec![
            NewUser::new("Admin User", "admin@elearning.com", "admin123", Role::Admin),
            NewUser::new("John Doe", "john@example.com", "password123", Role::Student),
        ]);

        let users = run_seeder(&seeder, "Users", &db).await.unwrap();
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["admin@elearning.com", "john@example.com"]);
        assert!(users[0].is_admin());
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let db = setup_test_db().await;
        let seeder = UserSeeder::new(vec![
            NewUser::new("First", "first@example.com", "password123", Role::Student),
            NewUser::new("Broken", "not-an-email", "password123", Role::Student),
            NewUser::new("Never", "never@example.com", "password123", Role::Student),
        ]);

        assert!(run_seeder(&seeder, "Users", &db).await.is_err());
        // No rollback: the rows written before the failure stay.
        assert_eq!(Model::count(&db).await.unwrap(), 1);
    }
}

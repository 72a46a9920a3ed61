use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510180001_create_users::Migration),
            Box::new(migrations::m202510180002_create_courses::Migration),
            Box::new(migrations::m202510180003_create_modules::Migration),
            Box::new(migrations::m202510180004_create_materials::Migration),
            Box::new(migrations::m202510180005_create_quizzes::Migration),
        ]
    }
}

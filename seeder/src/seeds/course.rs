//! Inserts course catalogs and links every level of the hierarchy.
//!
//! Row IDs only exist after insertion, so each parent is written twice: once
//! on creation with an empty child list, and again once all of its children
//! exist. Order fields and child lists always follow catalog order.

use crate::catalog::{CourseDef, ModuleDef};
use crate::error::SeedError;
use crate::seed::Seeder;
use db::models::{course, material, module, quiz};
use log::info;
use sea_orm::DatabaseConnection;
use std::pin::Pin;

/// A module as written, with its children in display order.
#[derive(Debug, Clone)]
pub struct SeededModule {
    pub module: module::Model,
    pub materials: Vec<material::Model>,
    pub quizzes: Vec<quiz::Model>,
}

#[derive(Debug, Clone)]
pub struct SeededCourse {
    pub course: course::Model,
    pub modules: Vec<SeededModule>,
}

impl SeededCourse {
    pub fn material_count(&self) -> usize {
        self.modules.iter().map(|m| m.materials.len()).sum()
    }

    pub fn quiz_count(&self) -> usize {
        self.modules.iter().map(|m| m.quizzes.len()).sum()
    }
}

/// Seeds a list of courses, all published, taught by one instructor.
pub struct CourseSeeder {
    courses: Vec<CourseDef>,
    instructor_id: i64,
}

impl CourseSeeder {
    pub fn new(courses: Vec<CourseDef>, instructor_id: i64) -> Self {
        Self {
            courses,
            instructor_id,
        }
    }
}

impl Seeder for CourseSeeder {
    type Output = Vec<SeededCourse>;

    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SeededCourse>, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let mut seeded = Vec::with_capacity(self.courses.len());
            for def in &self.courses {
                seeded.push(insert_course(db, def, self.instructor_id).await?);
            }
            Ok(seeded)
        })
    }
}

/// Writes one course with its modules, materials and quizzes.
pub async fn insert_course(
    db: &DatabaseConnection,
    def: &CourseDef,
    instructor_id: i64,
) -> Result<SeededCourse, SeedError> {
    let created = course::Model::create(db, &def.course, instructor_id, true).await?;
    info!("Course created: {}", created.title);

    let mut modules = Vec::with_capacity(def.modules.len());
    for (order, module_def) in (1..).zip(&def.modules) {
        modules.push(insert_module(db, module_def, created.id, order).await?);
    }

    let module_ids = modules.iter().map(|m| m.module.id).collect();
    let course = course::Model::set_modules(db, created.id, module_ids).await?;

    Ok(SeededCourse { course, modules })
}

async fn insert_module(
    db: &DatabaseConnection,
    def: &ModuleDef,
    course_id: i64,
    order: i32,
) -> Result<SeededModule, SeedError> {
    let created = module::Model::create(db, &def.module, course_id, order, true).await?;
    info!("  Module created: {}", created.title);

    let mut materials = Vec::with_capacity(def.materials.len());
    for (order, material_def) in (1..).zip(&def.materials) {
        let material = material::Model::create(db, material_def, created.id, order, true).await?;
        info!("    Added {}: {}", material.material_type, material.title);
        materials.push(material);
    }

    let mut quizzes = Vec::with_capacity(def.quizzes.len());
    for quiz_def in &def.quizzes {
        let quiz = quiz::Model::create(db, quiz_def, created.id, course_id, true).await?;
        info!("    Quiz added: {} ({} points)", quiz.title, quiz.total_points);
        quizzes.push(quiz);
    }

    let module = module::Model::set_children(
        db,
        created.id,
        materials.iter().map(|m| m.id).collect(),
        quizzes.iter().map(|q| q.id).collect(),
    )
    .await?;

    Ok(SeededModule {
        module,
        materials,
        quizzes,
    })
}

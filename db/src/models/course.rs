use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

use super::IdList;

/// A course in the `courses` table.
///
/// `modules` holds the ordered module IDs. It starts empty and is written once
/// every module of the course exists (see [`Model::set_modules`]).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub level: Level,
    /// Expected length in hours.
    pub duration: Option<i32>,
    pub thumbnail: Option<String>,
    pub instructor_id: i64,
    pub is_published: bool,
    #[sea_orm(column_type = "Json")]
    pub modules: IdList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "course_level")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Level {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InstructorId",
        to = "super::user::Column::Id"
    )]
    Instructor,

    #[sea_orm(has_many = "super::module::Entity")]
    Modules,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`].
#[derive(Debug, Clone, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1, message = "Course title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Course description cannot be empty"))]
    pub description: String,

    #[validate(length(min = 1, message = "Course category cannot be empty"))]
    pub category: String,

    pub level: Level,

    #[validate(range(min = 1, message = "Course duration must be at least one hour"))]
    pub duration: Option<i32>,

    #[validate(url(message = "Thumbnail must be a valid URL"))]
    pub thumbnail: Option<String>,
}

impl Model {
    /// Inserts a course with an empty module list.
    pub async fn create(
        db: &DatabaseConnection,
        course: &NewCourse,
        instructor_id: i64,
        is_published: bool,
    ) -> Result<Self, DbErr> {
        super::validate(course)?;

        let now = Utc::now();
        let active = ActiveModel {
            title: Set(course.title.clone()),
            description: Set(course.description.clone()),
            category: Set(course.category.clone()),
            level: Set(course.level),
            duration: Set(course.duration),
            thumbnail: Set(course.thumbnail.clone()),
            instructor_id: Set(instructor_id),
            is_published: Set(is_published),
            modules: Set(IdList::default()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_title(db: &DatabaseConnection, title: &str) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::Title.eq(title))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn instructor(&self, db: &DatabaseConnection) -> Result<Option<super::user::Model>, DbErr> {
        self.find_related(super::user::Entity).one(db).await
    }

    /// Replaces the course's module list with `module_ids`, in the given order.
    ///
    /// Every ID must name a module whose `course_id` is this course.
    pub async fn set_modules(
        db: &DatabaseConnection,
        id: i64,
        module_ids: Vec<i64>,
    ) -> Result<Self, DbErr> {
        let Some(course) = Self::get_by_id(db, id).await? else {
            return Err(DbErr::RecordNotFound(format!("Course {} not found", id)));
        };

        let owned: Vec<i64> = super::module::Model::get_by_course_id(db, id)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();
        super::ensure_owned(&module_ids, &owned, "module", &format!("course {}", id))?;

        let mut active = course.into_active_model();
        active.modules = Set(IdList(module_ids));
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(db).await?.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::module::{Model as ModuleModel, NewModule};
    use crate::models::user::{Model as UserModel, NewUser, Role};
    use crate::test_utils::setup_test_db;

    fn sample_course(title: &str) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: "Learn the fundamentals".to_string(),
            category: "Web Development".to_string(),
            level: Level::Beginner,
            duration: Some(40),
            thumbnail: None,
        }
    }

    async fn admin(db: &DatabaseConnection) -> UserModel {
        UserModel::create(db, &NewUser::new("Admin User", "admin@elearning.com", "admin123", Role::Admin))
            .await
            .expect("Failed to create admin")
    }

    #[tokio::test]
    async fn test_create_starts_with_no_modules() {
        let db = setup_test_db().await;
        let instructor = admin(&db).await;

        let course = Model::create(&db, &sample_course("Intro"), instructor.id, true)
            .await
            .expect("Failed to create course");

        assert_eq!(course.title, "Intro");
        assert_eq!(course.level, Level::Beginner);
        assert_eq!(course.duration, Some(40));
        assert!(course.is_published);
        assert!(course.modules.is_empty());

        let found = course.instructor(&db).await.unwrap().unwrap();
        assert_eq!(found.id, instructor.id);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_thumbnail_and_duration() {
        let db = setup_test_db().await;
        let instructor = admin(&db).await;

        let mut course = sample_course("Broken");
        course.thumbnail = Some("not a url".to_string());
        course.duration = Some(0);

        let err = Model::create(&db, &course, instructor.id, true).await.unwrap_err();
        assert!(err.to_string().contains("Thumbnail must be a valid URL"));
        assert!(err.to_string().contains("at least one hour"));
        assert_eq!(Model::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_requires_existing_instructor() {
        let db = setup_test_db().await;
        let result = Model::create(&db, &sample_course("Orphan"), 4242, true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_set_modules_keeps_given_order() {
        let db = setup_test_db().await;
        let instructor = admin(&db).await;
        let course = Model::create(&db, &sample_course("Ordered"), instructor.id, true)
            .await
            .unwrap();

        let mut ids = Vec::new();
        for order in 1..=3 {
            let module = ModuleModel::create(
                &db,
                &NewModule::new(&format!("Module {}", order), None),
                course.id,
                order,
                true,
            )
            .await
            .unwrap();
            ids.push(module.id);
        }

        let reversed: Vec<i64> = ids.iter().rev().copied().collect();
        let updated = Model::set_modules(&db, course.id, reversed.clone()).await.unwrap();
        assert_eq!(updated.modules.as_slice(), reversed.as_slice());

        let reloaded = Model::get_by_id(&db, course.id).await.unwrap().unwrap();
        assert_eq!(reloaded.modules.as_slice(), reversed.as_slice());
    }

    #[tokio::test]
    async fn test_set_modules_rejects_modules_of_other_courses() {
        let db = setup_test_db().await;
        let instructor = admin(&db).await;
        let first = Model::create(&db, &sample_course("First"), instructor.id, true)
            .await
            .unwrap();
        let second = Model::create(&db, &sample_course("Second"), instructor.id, true)
            .await
            .unwrap();

        let foreign = ModuleModel::create(&db, &NewModule::new("Elsewhere", None), second.id, 1, true)
            .await
            .unwrap();

        let err = Model::set_modules(&db, first.id, vec![foreign.id]).await.unwrap_err();
        assert!(err.to_string().contains("does not belong to course"));

        let untouched = Model::get_by_id(&db, first.id).await.unwrap().unwrap();
        assert!(untouched.modules.is_empty());
    }

    #[tokio::test]
    async fn test_set_modules_on_missing_course() {
        let db = setup_test_db().await;
        let err = Model::set_modules(&db, 99, vec![]).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }

    #[test]
    fn test_level_round_trips_through_strings() {
        assert_eq!("Advanced".parse::<Level>().unwrap(), Level::Advanced);
        assert_eq!(Level::Intermediate.to_string(), "intermediate");
    }
}

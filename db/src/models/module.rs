use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use validator::Validate;

use super::IdList;

/// A course module in the `modules` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub course_id: i64,
    /// 1-based display position, unique within the course.
    pub order: i32,
    pub is_published: bool,
    #[sea_orm(column_type = "Json")]
    pub materials: IdList,
    #[sea_orm(column_type = "Json")]
    pub quizzes: IdList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(has_many = "super::material::Entity")]
    Materials,

    #[sea_orm(has_many = "super::quiz::Entity")]
    Quizzes,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quizzes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Validate)]
pub struct NewModule {
    #[validate(length(min = 1, message = "Module title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
}

impl NewModule {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.map(str::to_owned),
        }
    }
}

impl Model {
    /// Inserts a module at position `order` of course `course_id`.
    pub async fn create(
        db: &DatabaseConnection,
        module: &NewModule,
        course_id: i64,
        order: i32,
        is_published: bool,
    ) -> Result<Self, DbErr> {
        super::validate(module)?;
        if order < 1 {
            return Err(DbErr::Custom(format!(
                "Module order must be positive, got {}",
                order
            )));
        }

        let now = Utc::now();
        let active = ActiveModel {
            title: Set(module.title.clone()),
            description: Set(module.description.clone()),
            course_id: Set(course_id),
            order: Set(order),
            is_published: Set(is_published),
            materials: Set(IdList::default()),
            quizzes: Set(IdList::default()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All modules of a course, by display order.
    pub async fn get_by_course_id(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    /// Writes the module's material and quiz lists in the given order.
    ///
    /// Every listed child must already reference this module.
    pub async fn set_children(
        db: &DatabaseConnection,
        id: i64,
        material_ids: Vec<i64>,
        quiz_ids: Vec<i64>,
    ) -> Result<Self, DbErr> {
        let Some(module) = Self::get_by_id(db, id).await? else {
            return Err(DbErr::RecordNotFound(format!("Module {} not found", id)));
        };
        let parent = format!("module {}", id);

        let materials: Vec<i64> = module
            .find_related(super::material::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();
        super::ensure_owned(&material_ids, &materials, "material", &parent)?;

        let quizzes: Vec<i64> = module
            .find_related(super::quiz::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|q| q.id)
            .collect();
        super::ensure_owned(&quiz_ids, &quizzes, "quiz", &parent)?;

        let mut active = module.into_active_model();
        active.materials = Set(IdList(material_ids));
        active.quizzes = Set(IdList(quiz_ids));
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

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidateUrl, ValidationError};

/// A learning material in the `materials` table.
///
/// The payload columns depend on `material_type`: videos fill
/// `video_embed_url` and `duration`, notes fill `content`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub material_type: MaterialType,
    pub module_id: i64,
    /// 1-based display position, unique within the module.
    pub order: i32,
    pub is_published: bool,
    pub video_embed_url: Option<String>,
    /// Video length in minutes.
    pub duration: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "material_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MaterialType {
    #[sea_orm(string_value = "video")]
    Video,
    #[sea_orm(string_value = "note")]
    Note,
}

/// What a material actually carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialContent {
    Video { embed_url: String, duration: i32 },
    /// Rich text (HTML).
    Note { content: String },
}

impl MaterialContent {
    pub fn material_type(&self) -> MaterialType {
        match self {
            MaterialContent::Video { .. } => MaterialType::Video,
            MaterialContent::Note { .. } => MaterialType::Note,
        }
    }
}

fn validate_content(content: &MaterialContent) -> Result<(), ValidationError> {
    match content {
        MaterialContent::Video { embed_url, duration } => {
            if !embed_url.validate_url() {
                return Err(ValidationError::new("embed_url")
                    .with_message("Video embed URL must be a valid URL".into()));
            }
            if *duration < 1 {
                return Err(ValidationError::new("duration")
                    .with_message("Video duration must be at least one minute".into()));
            }
        }
        MaterialContent::Note { content } => {
            if content.trim().is_empty() {
                return Err(ValidationError::new("content")
                    .with_message("Note content cannot be empty".into()));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Validate)]
pub struct NewMaterial {
    #[validate(length(min = 1, message = "Material title cannot be empty"))]
    pub title: String,

    #[validate(custom(function = "validate_content"))]
    pub content: MaterialContent,
}

impl NewMaterial {
    pub fn new(title: &str, content: MaterialContent) -> Self {
        Self {
            title: title.to_owned(),
            content,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a material at position `order` of module `module_id`.
    pub async fn create(
        db: &DatabaseConnection,
        material: &NewMaterial,
        module_id: i64,
        order: i32,
        is_published: bool,
    ) -> Result<Self, DbErr> {
        super::validate(material)?;
        if order < 1 {
            return Err(DbErr::Custom(format!(
                "Material order must be positive, got {}",
                order
            )));
        }

        let (video_embed_url, duration, content) = match &material.content {
            MaterialContent::Video { embed_url, duration } => {
                (Some(embed_url.clone()), Some(*duration), None)
            }
            MaterialContent::Note { content } => (None, None, Some(content.clone())),
        };

        let now = Utc::now();
        let active = ActiveModel {
            title: Set(material.title.clone()),
            material_type: Set(material.content.material_type()),
            module_id: Set(module_id),
            order: Set(order),
            is_published: Set(is_published),
            video_embed_url: Set(video_embed_url),
            duration: Set(duration),
            content: Set(content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Rebuilds the typed payload from the stored columns.
    ///
    /// Returns `None` if the row is missing a column its type requires.
    pub fn content(&self) -> Option<MaterialContent> {
        match self.material_type {
            MaterialType::Video => Some(MaterialContent::Video {
                embed_url: self.video_embed_url.clone()?,
                duration: self.duration?,
            }),
            MaterialType::Note => Some(MaterialContent::Note {
                content: self.content.clone()?,
            }),
        }
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_module_id(
        db: &DatabaseConnection,
        module_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(db).await?.rows_affected)
    }
}

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// User's unique email address.
    pub email: String,
    /// Argon2 hash of the password. The plain password is never stored.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,

    #[sea_orm(string_value = "student")]
    Student,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Courses this user teaches.
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`].
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    pub role: Role,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role,
        }
    }
}

impl Model {
    /// Validates `user`, hashes the password and inserts the row.
    pub async fn create(db: &DatabaseConnection, user: &NewUser) -> Result<Self, DbErr> {
        super::validate(user)?;

        let now = Utc::now();
        let active = ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(Self::hash_password(&user.password)?),
            role: Set(user.role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    /// The earliest-created admin, if any.
    pub async fn find_admin(db: &DatabaseConnection) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Role.eq(Role::Admin))
            .order_by_asc(Column::Id)
            .one(db)
            .await
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn count_by_role(db: &DatabaseConnection, role: Role) -> Result<u64, DbErr> {
        Entity::find().filter(Column::Role.eq(role)).count(db).await
    }

    /// Deletes every user. Returns the number of rows removed.
    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(db).await?.rows_affected)
    }
}

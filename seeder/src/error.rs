use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("could not connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: DbErr,
    },

    #[error("Admin user not found. Please run `seed` first.")]
    MissingAdmin,

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("seeder `{0}` panicked")]
    Panicked(String),
}

impl SeedError {
    /// Process exit status for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            SeedError::MissingAdmin,
            SeedError::Database(DbErr::Custom("boom".into())),
            SeedError::Panicked("Users".into()),
            SeedError::Connection {
                url: "sqlite://nowhere.db".into(),
                source: DbErr::Custom("refused".into()),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{}", err);
        }
    }

    #[test]
    fn missing_admin_message_points_at_seed() {
        assert!(SeedError::MissingAdmin.to_string().contains("run `seed` first"));
    }
}

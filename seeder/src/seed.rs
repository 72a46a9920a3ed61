use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

use crate::error::SeedError;

const STATUS_COLUMN: usize = 80;

/// One step of a seeding run.
pub trait Seeder {
    /// What the step hands to the steps after it (created rows, counts).
    type Output: Send;

    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<Self::Output, SeedError>> + Send + 'a>>;
}

/// Runs `seeder`, printing a `Seeding <name>..... done (t)` status line.
///
/// Errors are returned unchanged; a panic inside the step becomes
/// [`SeedError::Panicked`].
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<S::Output, SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = match std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
    {
        Ok(result) => result,
        Err(_) => Err(SeedError::Panicked(name.to_string())),
    };

    match &result {
        Ok(_) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Err(_) => println!("{}", "failed".red()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;
    use sea_orm::DbErr;

    struct Fixed(u32);

    impl Seeder for Fixed {
        type Output = u32;

        fn seed<'a>(
            &'a self,
            _db: &'a DatabaseConnection,
        ) -> Pin<Box<dyn Future<Output = Result<u32, SeedError>> + Send + 'a>> {
            Box::pin(async move { Ok(self.0) })
        }
    }

    struct Failing;

    impl Seeder for Failing {
        type Output = ();

        fn seed<'a>(
            &'a self,
            _db: &'a DatabaseConnection,
        ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
            Box::pin(async move { Err(DbErr::Custom("write failed".into()).into()) })
        }
    }

    struct Panicking;

    impl Seeder for Panicking {
        type Output = ();

        fn seed<'a>(
            &'a self,
            _db: &'a DatabaseConnection,
        ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
            Box::pin(async move {
                None::<()>.expect("catalog is broken");
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn passes_output_through() {
        let db = setup_test_db().await;
        assert_eq!(run_seeder(&Fixed(7), "Fixed", &db).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn propagates_errors() {
        let db = setup_test_db().await;
        let err = run_seeder(&Failing, "Failing", &db).await.unwrap_err();
        assert!(matches!(err, SeedError::Database(_)));
    }

    #[tokio::test]
    async fn turns_panics_into_errors() {
        let db = setup_test_db().await;
        let err = run_seeder(&Panicking, "Panicking", &db).await.unwrap_err();
        assert!(matches!(err, SeedError::Panicked(name) if name == "Panicking"));
    }
}

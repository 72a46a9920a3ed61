use futures::future::BoxFuture;
use log::{info, warn};
use sea_orm::DatabaseConnection;

use crate::error::SeedError;

/// Opens one connection to `url`, brings the schema up to date, runs `job`
/// and closes the connection again.
///
/// The connection is closed whether `job` succeeds or not. A failed close is
/// logged and does not change the returned result.
pub async fn run_session<T, F>(url: &str, job: F) -> Result<T, SeedError>
where
    F: for<'a> FnOnce(&'a DatabaseConnection) -> BoxFuture<'a, Result<T, SeedError>>,
{
    let db = db::connect(url).await.map_err(|source| SeedError::Connection {
        url: url.to_owned(),
        source,
    })?;
    info!("Connected to {}", url);

    let result = match db::migrate(&db).await {
        Ok(()) => job(&db).await,
        Err(err) => Err(err.into()),
    };

    match db.close().await {
        Ok(()) => info!("Connection to {} closed", url),
        Err(err) => warn!("Failed to close connection to {}: {}", url, err),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::user;
    use futures::FutureExt;

    #[tokio::test]
    async fn runs_job_against_migrated_schema() {
        let count = run_session("sqlite::memory:", |db| {
            async move { user::Model::count(db).await.map_err(SeedError::from) }.boxed()
        })
        .await
        .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn job_errors_are_returned() {
        let err = run_session("sqlite::memory:", |_db| {
            async move { Err::<(), _>(SeedError::MissingAdmin) }.boxed()
        })
        .await
        .unwrap_err();
        assert!(matches!(err, SeedError::MissingAdmin));
    }

    #[tokio::test]
    async fn non_sqlite_urls_are_connection_errors() {
        for url in ["mysql://root@localhost/elearning", "postgres://nohost:1/x"] {
            let err = run_session(url, |_db| async move { Ok::<(), SeedError>(()) }.boxed())
                .await
                .unwrap_err();
            assert!(
                matches!(&err, SeedError::Connection { url: failed, .. } if failed == url),
                "{err}"
            );
            assert_eq!(err.exit_code(), 1);
        }
    }
}

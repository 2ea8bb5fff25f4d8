//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::books::{
        factory::{BookFactory, UuidSeqGenerator},
        repository::{BookRepository, PgBookRepository},
        service::{BookModifyService, BookRegisterService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Wired catalog services, ready for a host application to call.
#[derive(Clone)]
pub struct AppContext {
    pub register: BookRegisterService,
    pub modify: BookModifyService,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or
    /// preparing the schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_books_table(&pool)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_repository(Arc::new(PgBookRepository::new(pool))))
    }

    /// Wire the services over any repository backend.
    #[must_use]
    pub fn from_repository(repository: Arc<dyn BookRepository>) -> Self {
        let factory = BookFactory::new(Arc::new(UuidSeqGenerator));

        Self {
            register: BookRegisterService::new(Arc::clone(&repository), factory),
            modify: BookModifyService::new(repository),
        }
    }
}

//! Database connection management

use sqlx::{PgPool, query};

/// DDL for the books table. Audit timestamps are written by the repository
/// rather than by column defaults, so stamping stays an explicit step.
const CREATE_BOOKS_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS books (
    book_seq         BIGINT PRIMARY KEY,
    title            TEXT NOT NULL,
    author           TEXT NOT NULL,
    publication_date TIMESTAMPTZ,
    price            NUMERIC(12, 2),
    created_at       TIMESTAMPTZ NOT NULL,
    updated_at       TIMESTAMPTZ NOT NULL,
    created_by       BIGINT,
    updated_by       BIGINT
)";

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Create the books table when it does not exist yet.
///
/// # Errors
///
/// Returns an error when executing the DDL fails.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    query(CREATE_BOOKS_TABLE_SQL).execute(pool).await?;

    Ok(())
}

//! Books Repository

use async_trait::async_trait;
use jiff_sqlx::{Timestamp as SqlxTimestamp, ToSqlx};
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use tracing::debug;

use crate::{
    audit::Audit,
    domain::books::{
        errors::BooksServiceError,
        models::{Book, NewBook},
    },
    ids::{ActorId, BookSeq},
};

const FIND_BOOK_SQL: &str = include_str!("sql/find_book.sql");
const INSERT_BOOK_SQL: &str = include_str!("sql/insert_book.sql");
const SAVE_BOOK_SQL: &str = include_str!("sql/save_book.sql");

/// Persistence seam the catalog services run against.
///
/// Implementations own the transaction boundary and the audit stamping:
/// `save` touches the update pair of an existing record, `save_all` stamps
/// full audit blocks for a batch of new ones.
#[automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Looks a book up by its surrogate key.
    async fn find_by_seq(&self, seq: BookSeq) -> Result<Option<Book>, BooksServiceError>;

    /// Persists one book, attributing the write to `actor`.
    async fn save(&self, book: Book, actor: Option<ActorId>) -> Result<Book, BooksServiceError>;

    /// Persists a batch of new books atomically, returning them in input
    /// order. The batch either fully persists or fully fails.
    async fn save_all(
        &self,
        books: Vec<NewBook>,
        actor: Option<ActorId>,
    ) -> Result<Vec<Book>, BooksServiceError>;
}

/// PostgreSQL-backed books repository.
#[derive(Debug, Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    #[tracing::instrument(name = "books.repository.find_by_seq", skip(self), err)]
    async fn find_by_seq(&self, seq: BookSeq) -> Result<Option<Book>, BooksServiceError> {
        query_as::<Postgres, Book>(FIND_BOOK_SQL)
            .bind(seq.into_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(BooksServiceError::from)
    }

    #[tracing::instrument(name = "books.repository.save", skip(self, book), err)]
    async fn save(&self, mut book: Book, actor: Option<ActorId>) -> Result<Book, BooksServiceError> {
        book.audit.touch(actor);

        let saved = query_as::<Postgres, Book>(SAVE_BOOK_SQL)
            .bind(book.seq.into_i64())
            .bind(book.title)
            .bind(book.author)
            .bind(book.publication_date.map(ToSqlx::to_sqlx))
            .bind(book.price)
            .bind(book.audit.created_at.to_sqlx())
            .bind(book.audit.updated_at.to_sqlx())
            .bind(book.audit.created_by.map(ActorId::into_i64))
            .bind(book.audit.updated_by.map(ActorId::into_i64))
            .fetch_one(&self.pool)
            .await
            .map_err(BooksServiceError::from)?;

        debug!(seq = %saved.seq, "saved book");

        Ok(saved)
    }

    #[tracing::instrument(
        name = "books.repository.save_all",
        skip(self, books),
        fields(book_count = books.len()),
        err
    )]
    async fn save_all(
        &self,
        books: Vec<NewBook>,
        actor: Option<ActorId>,
    ) -> Result<Vec<Book>, BooksServiceError> {
        let mut tx = self.pool.begin().await.map_err(BooksServiceError::from)?;

        let mut saved = Vec::with_capacity(books.len());

        for book in books {
            let audit = Audit::stamped(actor);

            let row = query_as::<Postgres, Book>(INSERT_BOOK_SQL)
                .bind(book.seq.into_i64())
                .bind(book.title)
                .bind(book.author)
                .bind(book.publication_date.map(ToSqlx::to_sqlx))
                .bind(book.price)
                .bind(audit.created_at.to_sqlx())
                .bind(audit.updated_at.to_sqlx())
                .bind(audit.created_by.map(ActorId::into_i64))
                .bind(audit.updated_by.map(ActorId::into_i64))
                .fetch_one(&mut *tx)
                .await
                .map_err(BooksServiceError::from)?;

            saved.push(row);
        }

        tx.commit().await.map_err(BooksServiceError::from)?;

        debug!(book_count = saved.len(), "registered book batch");

        Ok(saved)
    }
}

impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            seq: BookSeq::from_i64(row.try_get("book_seq")?),
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            publication_date: row
                .try_get::<Option<SqlxTimestamp>, _>("publication_date")?
                .map(SqlxTimestamp::to_jiff),
            price: row.try_get::<Option<Decimal>, _>("price")?,
            audit: Audit {
                created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
                created_by: row
                    .try_get::<Option<i64>, _>("created_by")?
                    .map(ActorId::from_i64),
                updated_by: row
                    .try_get::<Option<i64>, _>("updated_by")?
                    .map(ActorId::from_i64),
            },
        })
    }
}

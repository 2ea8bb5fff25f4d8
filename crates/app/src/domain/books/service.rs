//! Books services.

use std::sync::Arc;

use crate::{
    domain::books::{
        data::{BookPriceUpdate, BookSave},
        errors::BooksServiceError,
        factory::BookFactory,
        models::Book,
        repository::BookRepository,
    },
    ids::ActorId,
};

/// Registers batches of new books.
#[derive(Clone)]
pub struct BookRegisterService {
    repository: Arc<dyn BookRepository>,
    factory: BookFactory,
}

impl BookRegisterService {
    #[must_use]
    pub fn new(repository: Arc<dyn BookRepository>, factory: BookFactory) -> Self {
        Self {
            repository,
            factory,
        }
    }

    /// Converts each save request through the factory and persists the whole
    /// batch in one repository call, attributed to `actor`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures unchanged; there is no partial
    /// success. The batch either fully persists or fully fails.
    pub async fn register(
        &self,
        actor: Option<ActorId>,
        saves: Vec<BookSave>,
    ) -> Result<Vec<Book>, BooksServiceError> {
        let new_books = saves
            .into_iter()
            .map(|save| self.factory.from_save(save))
            .collect();

        self.repository.save_all(new_books, actor).await
    }
}

/// Applies price updates to registered books.
#[derive(Clone)]
pub struct BookModifyService {
    repository: Arc<dyn BookRepository>,
}

impl BookModifyService {
    #[must_use]
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Replaces the price of the book identified by `update.seq`.
    ///
    /// # Errors
    ///
    /// Returns [`BooksServiceError::NotFound`] when no book exists for the
    /// seq; nothing is mutated in that case. Repository failures propagate
    /// unchanged.
    pub async fn modify(
        &self,
        actor: Option<ActorId>,
        update: BookPriceUpdate,
    ) -> Result<(), BooksServiceError> {
        let mut book = self
            .repository
            .find_by_seq(update.seq)
            .await?
            .ok_or(BooksServiceError::NotFound)?;

        book.update_price(update.price);

        self.repository.save(book, actor).await?;

        Ok(())
    }
}

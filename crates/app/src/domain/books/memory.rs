//! In-memory books repository.

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;

use crate::{
    audit::Audit,
    domain::books::{
        errors::BooksServiceError,
        models::{Book, NewBook},
        repository::BookRepository,
    },
    ids::{ActorId, BookSeq},
};

/// Process-local books repository.
///
/// Backs the service test suite and embedders that run without PostgreSQL.
/// The write lock is the whole transaction boundary: `save_all` checks the
/// batch for seq conflicts before inserting anything, so a conflicting batch
/// persists nothing.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<FxHashMap<BookSeq, Book>>,
}

impl InMemoryBookRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_seq(&self, seq: BookSeq) -> Result<Option<Book>, BooksServiceError> {
        Ok(self.books.read().await.get(&seq).cloned())
    }

    async fn save(&self, mut book: Book, actor: Option<ActorId>) -> Result<Book, BooksServiceError> {
        book.audit.touch(actor);

        self.books.write().await.insert(book.seq, book.clone());

        Ok(book)
    }

    async fn save_all(
        &self,
        books: Vec<NewBook>,
        actor: Option<ActorId>,
    ) -> Result<Vec<Book>, BooksServiceError> {
        let mut store = self.books.write().await;

        let mut incoming = FxHashSet::default();
        for book in &books {
            if store.contains_key(&book.seq) || !incoming.insert(book.seq) {
                return Err(BooksServiceError::AlreadyExists);
            }
        }

        let mut saved = Vec::with_capacity(books.len());

        for book in books {
            let book = Book {
                seq: book.seq,
                title: book.title,
                author: book.author,
                publication_date: book.publication_date,
                price: book.price,
                audit: Audit::stamped(actor),
            };

            store.insert(book.seq, book.clone());
            saved.push(book);
        }

        Ok(saved)
    }
}

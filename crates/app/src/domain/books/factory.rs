//! Book construction.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::books::{data::BookSave, models::NewBook},
    ids::BookSeq,
};

/// Strategy for assigning surrogate keys to new books.
///
/// Injectable so tests can hand out deterministic sequences.
pub trait BookSeqGenerator: Send + Sync {
    fn next_seq(&self) -> BookSeq;
}

/// Derives seqs from the upper 64 bits of a fresh random UUID.
///
/// Collisions are possible in principle; no collision check is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSeqGenerator;

impl BookSeqGenerator for UuidSeqGenerator {
    fn next_seq(&self) -> BookSeq {
        let (most_significant, _) = Uuid::new_v4().as_u64_pair();

        BookSeq::from_i64(most_significant as i64)
    }
}

/// Maps save requests to not-yet-persisted books.
#[derive(Clone)]
pub struct BookFactory {
    seqs: Arc<dyn BookSeqGenerator>,
}

impl BookFactory {
    #[must_use]
    pub fn new(seqs: Arc<dyn BookSeqGenerator>) -> Self {
        Self { seqs }
    }

    /// Copies the request fields verbatim and assigns a fresh seq.
    #[must_use]
    pub fn from_save(&self, save: BookSave) -> NewBook {
        NewBook {
            seq: self.seqs.next_seq(),
            title: save.title,
            author: save.author,
            publication_date: save.publication_date,
            price: save.price,
        }
    }
}

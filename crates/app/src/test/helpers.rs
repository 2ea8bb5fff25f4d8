//! Test Helpers

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use crate::{
    audit::Audit,
    domain::books::{
        data::BookSave,
        factory::{BookFactory, BookSeqGenerator},
        models::{Book, NewBook},
    },
    ids::{ActorId, BookSeq},
};

/// Deterministic seq generator handing out consecutive values.
#[derive(Debug)]
pub struct SequenceSeqGenerator {
    next: AtomicI64,
}

impl SequenceSeqGenerator {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl BookSeqGenerator for SequenceSeqGenerator {
    fn next_seq(&self) -> BookSeq {
        BookSeq::from_i64(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

pub fn sequence_factory() -> BookFactory {
    BookFactory::new(Arc::new(SequenceSeqGenerator::starting_at(1)))
}

pub fn actor(id: i64) -> Option<ActorId> {
    Some(ActorId::from_i64(id))
}

pub fn save(title: &str, author: &str) -> BookSave {
    BookSave {
        title: title.to_string(),
        author: author.to_string(),
        publication_date: None,
        price: None,
    }
}

pub fn priced_save(title: &str, author: &str, price: rust_decimal::Decimal) -> BookSave {
    BookSave {
        price: Some(price),
        ..save(title, author)
    }
}

pub fn new_book(seq: i64) -> NewBook {
    NewBook {
        seq: BookSeq::from_i64(seq),
        title: "Some title".to_string(),
        author: "Some author".to_string(),
        publication_date: None,
        price: None,
    }
}

pub fn book(seq: i64) -> Book {
    let NewBook {
        seq,
        title,
        author,
        publication_date,
        price,
    } = new_book(seq);

    Book {
        seq,
        title,
        author,
        publication_date,
        price,
        audit: Audit::stamped(None),
    }
}

//! Book Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{audit::Audit, ids::BookSeq};

/// Book Model
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Surrogate key, assigned by the factory at construction time.
    pub seq: BookSeq,

    pub title: String,

    pub author: String,

    pub publication_date: Option<Timestamp>,

    /// The only business field with an update path.
    pub price: Option<Decimal>,

    /// Maintained by the persistence layer.
    pub audit: Audit,
}

impl Book {
    /// Replaces the price. The change reaches the store through the
    /// enclosing service operation's save.
    pub fn update_price(&mut self, price: Decimal) {
        self.price = Some(price);
    }
}

/// New Book Model
///
/// Not yet persisted, so it carries no audit block.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub seq: BookSeq,
    pub title: String,
    pub author: String,
    pub publication_date: Option<Timestamp>,
    pub price: Option<Decimal>,
}

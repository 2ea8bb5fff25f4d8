//! Books Data

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::BookSeq;

/// Save request for a single book.
///
/// Treated as an opaque input: fields are copied verbatim into the new
/// record, empty strings included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSave {
    pub title: String,
    pub author: String,
    pub publication_date: Option<Timestamp>,
    pub price: Option<Decimal>,
}

/// Price update request for a registered book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPriceUpdate {
    pub seq: BookSeq,
    pub price: Decimal,
}

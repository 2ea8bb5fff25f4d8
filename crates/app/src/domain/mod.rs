//! Catalog Domain Concerns

pub mod books;

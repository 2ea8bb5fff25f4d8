//! Books

pub mod data;
pub mod errors;
pub mod factory;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::BooksServiceError;
pub use service::*;

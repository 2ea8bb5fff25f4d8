//! Books service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Books service error variants.
#[derive(Debug, Error)]
pub enum BooksServiceError {
    /// A book with the same seq already exists.
    #[error("book already exists")]
    AlreadyExists,

    /// Book was not found.
    #[error("book not found")]
    NotFound,

    /// Referenced related row does not exist.
    #[error("related resource not found")]
    InvalidReference,

    /// Required data was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// Provided data failed validation.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BooksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = BooksServiceError::from(Error::RowNotFound);

        assert!(matches!(error, BooksServiceError::NotFound));
    }

    #[test]
    fn other_errors_pass_through_as_sql() {
        let error = BooksServiceError::from(Error::PoolClosed);

        assert!(matches!(error, BooksServiceError::Sql(Error::PoolClosed)));
    }
}

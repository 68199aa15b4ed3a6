use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginatorError {
    /// A page is numbered from 1
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(i64),

    /// Recovered by the lenient conversions in `utils`, which fall back to 0
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

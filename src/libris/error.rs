use crate::model::BookId;
use crate::validation::ValidationError;
use thiserror::Error;

/// Machine-readable category of a [`LibrisError`].
///
/// Callers that need to branch on a failure should match on this rather than
/// on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unavailable,
    LimitReached,
    Duplicate,
    NotImplemented,
    Config,
    Io,
    Serialization,
    Store,
}

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("\"{title}\" (book {book_id}) is not available: no copies left on the shelf.")]
    NoCopiesAvailable { book_id: BookId, title: String },

    #[error("You have reached the maximum borrowing limit of {0} books.")]
    BorrowLimitReached(usize),

    #[error("A book with ISBN {0} already exists.")]
    DuplicateIsbn(String),

    #[error("{0} is not implemented.")]
    NotImplemented(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl LibrisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibrisError::Validation(_) => ErrorKind::Validation,
            LibrisError::BookNotFound(_) => ErrorKind::NotFound,
            LibrisError::NoCopiesAvailable { .. } => ErrorKind::Unavailable,
            LibrisError::BorrowLimitReached(_) => ErrorKind::LimitReached,
            LibrisError::DuplicateIsbn(_) => ErrorKind::Duplicate,
            LibrisError::NotImplemented(_) => ErrorKind::NotImplemented,
            LibrisError::Config(_) => ErrorKind::Config,
            LibrisError::Io(_) => ErrorKind::Io,
            LibrisError::Serialization(_) => ErrorKind::Serialization,
            LibrisError::Store(_) => ErrorKind::Store,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;

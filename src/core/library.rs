use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Raised when an operation needs at least one record but the provider
    // snapshot came back empty.
    EmptyCollection {
        message: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn empty_collection(message: &str) -> LibraryError {
        LibraryError::EmptyCollection { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<chrono::ParseError> for LibraryError {
    fn from(err: chrono::ParseError) -> Self {
        LibraryError::validation(
            format!("published date parsing {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::EmptyCollection { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for the book service.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_empty_collection_error() {
        assert!(matches!(LibraryError::empty_collection("test"), LibraryError::EmptyCollection{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_error_message_verbatim() {
        let err = LibraryError::not_found("Book with such id not found");
        assert_eq!("Book with such id not found", err.to_string().as_str());
    }

    #[tokio::test]
    async fn test_should_convert_serde_error() {
        let err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }
}

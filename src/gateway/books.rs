use async_trait::async_trait;

use crate::books::domain::model::BookRecord;
use crate::core::library::LibraryResult;

// BooksProvider abstracts the source of book records. Each call returns the
// current snapshot; the service never caches across calls, so two calls may
// observe different snapshots.
#[async_trait]
pub trait BooksProvider: Sync + Send {
    fn get_books(&self) -> Vec<BookRecord>;

    // Seam for providers backed by remote storage; in-memory providers just
    // hand back the synchronous snapshot.
    async fn get_books_async(&self) -> Vec<BookRecord> {
        self.get_books()
    }
}

// Snapshot-backed provider used by tests and embedding applications.
pub struct InMemoryBooksProvider {
    books: Vec<BookRecord>,
}

impl InMemoryBooksProvider {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    // builds a provider from a serialized snapshot payload
    pub fn from_json(payload: &str) -> LibraryResult<Self> {
        let books: Vec<BookRecord> = serde_json::from_str(payload)?;
        Ok(Self::new(books))
    }
}

#[async_trait]
impl BooksProvider for InMemoryBooksProvider {
    fn get_books(&self) -> Vec<BookRecord> {
        self.books.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookRecord;
    use crate::core::library::LibraryError;
    use crate::gateway::books::{BooksProvider, InMemoryBooksProvider};

    #[tokio::test]
    async fn test_should_return_snapshot() {
        let provider = InMemoryBooksProvider::new(vec![
            BookRecord::new(1, "C# Introduction"),
            BookRecord::new(2, "Another Day"),
        ]);
        assert_eq!(2, provider.get_books().len());
        assert_eq!(2, provider.get_books_async().await.len());
    }

    #[tokio::test]
    async fn test_should_build_provider_from_json() {
        let provider = InMemoryBooksProvider::from_json(
            r#"[{"book_id": 1, "title": "C# Introduction", "published_date": "2008-04-01T00:00:00.000-0700"},
                {"book_id": 2, "title": "Another Day"}]"#,
        ).expect("should parse snapshot");

        let books = provider.get_books();
        assert_eq!(2, books.len());
        assert_eq!("C# Introduction", books[0].title.as_str());
        assert_eq!(None, books[1].published_date);
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_json() {
        let res = InMemoryBooksProvider::from_json("not a snapshot");
        assert!(matches!(res, Err(LibraryError::Serialization { message: _ })));
    }
}

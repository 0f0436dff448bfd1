pub mod model;
pub mod service;

use async_trait::async_trait;

use crate::books::domain::model::BookRecord;
use crate::books::dto::BookView;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait BookService: Sync + Send {
    /// Returns the books whose title contains the query, in snapshot order.
    /// Notifies the email gateway exactly once when nothing matches.
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookView>>;

    /// Returns the most ordered book; ties go to the first one in snapshot order.
    fn most_popular_book(&self) -> LibraryResult<BookRecord>;

    /// Returns the discounted price for the given book id.
    fn calculate_discount(&self, book_id: i64) -> LibraryResult<f64>;

    /// Async variant of calculate_discount; suspends at the snapshot fetch.
    async fn calculate_discount_async(&self, book_id: i64) -> LibraryResult<f64>;
}

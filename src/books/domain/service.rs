use async_trait::async_trait;
use tracing::debug;

use crate::books::domain::model::BookRecord;
use crate::books::domain::BookService;
use crate::books::dto::BookView;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::books::BooksProvider;
use crate::gateway::email::EmailNotifier;
use crate::utils::date::published_year;

pub struct BookServiceImpl {
    discount_rate: f64,
    books_provider: Box<dyn BooksProvider>,
    email_notifier: Box<dyn EmailNotifier>,
}

impl BookServiceImpl {
    pub fn new(config: &Configuration, books_provider: Box<dyn BooksProvider>,
               email_notifier: Box<dyn EmailNotifier>) -> Self {
        Self {
            discount_rate: config.discount_rate,
            books_provider,
            email_notifier,
        }
    }

    // shared discount core for the sync and async call surfaces
    fn discounted_price(&self, books: &[BookRecord], book_id: i64) -> LibraryResult<f64> {
        let book = books.iter().find(|b| b.id() == book_id)
            .ok_or_else(|| LibraryError::not_found("Book with such id not found"))?;
        let price = book.price.ok_or_else(|| LibraryError::validation(
            format!("book {} has no price", book_id).as_str()))?;
        if price < 0.0 {
            return Err(LibraryError::validation(
                format!("book {} has negative price {}", book_id, price).as_str()));
        }
        Ok(price * self.discount_rate)
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookView>> {
        let books = self.books_provider.get_books();
        let mut views = Vec::new();
        for book in books.iter().filter(|b| b.title.contains(query)) {
            views.push(BookView::try_from(book)?);
        }
        debug!("search '{}' matched {} of {} books", query, views.len(), books.len());
        if views.is_empty() {
            self.email_notifier.send_missing_book_email();
        }
        Ok(views)
    }

    fn most_popular_book(&self) -> LibraryResult<BookRecord> {
        let mut most_popular: Option<BookRecord> = None;
        for book in self.books_provider.get_books() {
            // strictly-greater keeps the first maximal record in snapshot order
            let more_popular = match &most_popular {
                Some(leader) => book.ordered.unwrap_or(0) > leader.ordered.unwrap_or(0),
                None => true,
            };
            if more_popular {
                most_popular = Some(book);
            }
        }
        most_popular.ok_or_else(|| LibraryError::empty_collection("no books available"))
    }

    fn calculate_discount(&self, book_id: i64) -> LibraryResult<f64> {
        let books = self.books_provider.get_books();
        self.discounted_price(&books, book_id)
    }

    async fn calculate_discount_async(&self, book_id: i64) -> LibraryResult<f64> {
        let books = self.books_provider.get_books_async().await;
        self.discounted_price(&books, book_id)
    }
}

impl TryFrom<&BookRecord> for BookView {
    type Error = LibraryError;

    fn try_from(other: &BookRecord) -> LibraryResult<Self> {
        let title = match &other.published_date {
            Some(date) => format!("{} {}", other.title, published_year(date)?),
            None => other.title.to_string(),
        };
        Ok(Self {
            book_id: other.book_id,
            title,
            ordered: other.ordered,
            price: other.price,
        })
    }
}

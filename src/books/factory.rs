use crate::books::domain::service::BookServiceImpl;
use crate::books::domain::BookService;
use crate::core::domain::Configuration;
use crate::gateway::books::BooksProvider;
use crate::gateway::email::EmailNotifier;

pub fn create_book_service(config: &Configuration, books_provider: Box<dyn BooksProvider>,
                           email_notifier: Box<dyn EmailNotifier>) -> Box<dyn BookService> {
    Box::new(BookServiceImpl::new(config, books_provider, email_notifier))
}

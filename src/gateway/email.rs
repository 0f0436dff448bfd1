use tracing::info;

// EmailNotifier abstracts the notification channel used when a search finds
// nothing. Fire-and-forget: the service never consumes a result.
pub trait EmailNotifier: Sync + Send {
    fn send_missing_book_email(&self);
}

// Delivery itself is owned by an external system; this notifier only records
// that the notification was requested.
pub struct LoggingEmailNotifier {}

impl LoggingEmailNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for LoggingEmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailNotifier for LoggingEmailNotifier {
    fn send_missing_book_email(&self) {
        info!("sending missing-book email");
    }
}

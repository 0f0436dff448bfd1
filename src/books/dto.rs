use serde::{Deserialize, Serialize};

use crate::core::domain::Identifiable;

// BookView is the caller-facing shape returned by searches. The display title
// carries the publication year when the record has one; the publication date
// itself is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookView {
    pub book_id: i64,
    pub title: String,
    pub ordered: Option<u64>,
    pub price: Option<f64>,
}

impl Identifiable for BookView {
    fn id(&self) -> i64 {
        self.book_id
    }
}

use serde::{Deserialize, Serialize};

use crate::core::domain::Identifiable;

// BookRecord is one entry of a provider snapshot. Only id and title are
// guaranteed; the remaining fields are absent for some records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub book_id: i64,
    pub title: String,
    #[serde(default)]
    pub published_date: Option<String>,
    // times purchased, used for popularity ranking
    #[serde(default)]
    pub ordered: Option<u64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl BookRecord {
    pub fn new(book_id: i64, title: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            published_date: None,
            ordered: None,
            price: None,
        }
    }
}

impl Identifiable for BookRecord {
    fn id(&self) -> i64 {
        self.book_id
    }
}

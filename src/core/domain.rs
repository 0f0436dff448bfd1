use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

pub const DEFAULT_DISCOUNT_RATE: f64 = 0.8;

// Configuration abstracts pricing policy options for the book service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // multiplier applied to the list price, e.g. 0.8 for a 20% discount
    pub discount_rate: f64,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

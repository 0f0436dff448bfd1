pub mod books;
pub mod core;
pub mod gateway;
pub mod utils;

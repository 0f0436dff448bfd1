pub mod books;
pub mod email;

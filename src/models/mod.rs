//! Data models for Libris

pub mod book;
pub mod borrow_log;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use borrow_log::{BookRef, BorrowLog, BorrowLogDetails, NewBorrow};

//! Borrow management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::Book,
        borrow_log::{BorrowLog, BorrowLogDetails, NewBorrow},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book: decrements stock and appends a borrow log as one
    /// atomic unit. Returns the updated book and the created log entry.
    pub async fn borrow_book(&self, borrow: NewBorrow) -> AppResult<(Book, BorrowLog)> {
        borrow.validate()?;

        let (book, log) = self.repository.borrow_logs.create(&borrow).await?;

        tracing::info!(
            book_id = book.id,
            user_id = borrow.user_id,
            remaining = book.stock,
            "book borrowed"
        );

        Ok((book, log))
    }

    /// All borrow logs, newest first, with book references resolved
    pub async fn list_logs(&self) -> AppResult<Vec<BorrowLogDetails>> {
        self.repository.borrow_logs.list_with_books().await
    }
}

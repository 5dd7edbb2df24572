//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

/// Trim a required text field, rejecting blank input
fn required_trimmed(value: &str, message: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books ordered by id
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book. Title and author are stored trimmed.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let title = required_trimmed(&book.title, "Title cannot be empty")?;
        let author = required_trimmed(&book.author, "Author cannot be empty")?;

        let created = self.repository.books.create(&title, &author, book.stock).await?;
        tracing::info!(book_id = created.id, "book created: {}", created.title);

        Ok(created)
    }

    /// Apply a partial update; only fields present in the patch are
    /// validated and changed.
    pub async fn update_book(&self, id: i32, mut patch: UpdateBook) -> AppResult<Book> {
        patch.validate()?;

        if let Some(ref title) = patch.title {
            patch.title = Some(required_trimmed(title, "Title cannot be empty")?);
        }
        if let Some(ref author) = patch.author {
            patch.author = Some(required_trimmed(author, "Author cannot be empty")?);
        }

        self.repository.books.update(id, &patch).await
    }

    /// Hard delete a book. Its borrow logs remain as orphans.
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trimmed_trims_whitespace() {
        let value = required_trimmed("  Dune ", "Title cannot be empty").unwrap();
        assert_eq!(value, "Dune");
    }

    #[test]
    fn required_trimmed_rejects_empty() {
        assert!(required_trimmed("", "Title cannot be empty").is_err());
    }

    #[test]
    fn required_trimmed_rejects_whitespace_only() {
        let err = required_trimmed("   ", "Author cannot be empty").unwrap_err();
        match err {
            AppError::Validation { message, .. } => assert_eq!(message, "Author cannot be empty"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

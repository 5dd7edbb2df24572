//! Borrow logs repository for database operations.
//!
//! The borrow transaction lives here: the stock decrement and the log insert
//! must commit or roll back together, and concurrent borrows of the same
//! book must be serialized on the book row.

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        borrow_log::{BookRef, BorrowLog, BorrowLogDetails, NewBorrow},
    },
};

#[derive(Clone)]
pub struct BorrowLogsRepository {
    pool: Pool<Postgres>,
}

impl BorrowLogsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrow a book: decrement its stock and append a log entry.
    ///
    /// Runs in a single transaction with the book row locked up front, so
    /// two borrows racing for the last copy cannot both succeed: the loser
    /// blocks on the lock, then observes stock 0 and fails with OutOfStock.
    /// Any failure after the decrement rolls the decrement back.
    pub async fn create(&self, borrow: &NewBorrow) -> AppResult<(Book, BorrowLog)> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1 FOR UPDATE")
            .bind(borrow.book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", borrow.book_id)))?;

        if book.stock <= 0 {
            return Err(AppError::OutOfStock("Book is out of stock".to_string()));
        }

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET stock = stock - 1, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(borrow.book_id)
        .fetch_one(&mut *tx)
        .await?;

        let log = sqlx::query_as::<_, BorrowLog>(
            r#"
            INSERT INTO borrow_logs (user_id, book_id, borrow_date, latitude, longitude)
            VALUES ($1, $2, NOW(), $3, $4)
            RETURNING *
            "#,
        )
        .bind(borrow.user_id)
        .bind(borrow.book_id)
        .bind(borrow.latitude)
        .bind(borrow.longitude)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((book, log))
    }

    /// All borrow logs, newest first, joined with the book when it still
    /// exists. Orphaned logs (book deleted) come back with `book: None`.
    pub async fn list_with_books(&self) -> AppResult<Vec<BorrowLogDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.user_id, l.book_id, l.borrow_date, l.latitude, l.longitude,
                   b.id as joined_book_id, b.title, b.author
            FROM borrow_logs l
            LEFT JOIN books b ON l.book_id = b.id
            ORDER BY l.borrow_date DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let joined_book_id: Option<i32> = row.get("joined_book_id");

            result.push(BorrowLogDetails {
                id: row.get("id"),
                user_id: row.get("user_id"),
                book_id: row.get("book_id"),
                borrow_date: row.get("borrow_date"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
                book: joined_book_id.map(|id| BookRef {
                    id,
                    title: row.get("title"),
                    author: row.get("author"),
                }),
            });
        }

        Ok(result)
    }
}

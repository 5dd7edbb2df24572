//! Borrow log model and related types.
//!
//! Borrow logs are append-only: once created they are never updated or
//! deleted by the application, and they survive deletion of their book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Borrow log model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowLog {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated borrow command passed to the borrow transaction
#[derive(Debug, Clone, Validate)]
pub struct NewBorrow {
    pub user_id: i32,
    pub book_id: i32,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Short book reference as shown in log listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookRef {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Borrow log joined with its book.
///
/// `book` is `null` when the book has since been deleted; clients render
/// such orphaned entries as "book not found".
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowLogDetails {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub book: Option<BookRef>,
}

//! Book (catalog) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Count of available physical copies; never negative
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    /// Initial number of copies; defaults to 0
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Partial book update; only fields present in the request are touched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_camel_case() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            stock: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["stock"], 3);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn create_book_stock_defaults_to_zero() {
        let create: CreateBook =
            serde_json::from_str(r#"{"title": "Dune", "author": "Frank Herbert"}"#).unwrap();
        assert_eq!(create.stock, 0);
    }

    #[test]
    fn create_book_rejects_negative_stock() {
        let create: CreateBook =
            serde_json::from_str(r#"{"title": "Dune", "author": "Frank Herbert", "stock": -1}"#)
                .unwrap();
        assert!(create.validate().is_err());
    }

    #[test]
    fn update_book_absent_fields_are_none() {
        let patch: UpdateBook = serde_json::from_str(r#"{"stock": 5}"#).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.author.is_none());
        assert_eq!(patch.stock, Some(5));
    }

    #[test]
    fn update_book_rejects_negative_stock() {
        let patch: UpdateBook = serde_json::from_str(r#"{"stock": -3}"#).unwrap();
        assert!(patch.validate().is_err());
    }
}

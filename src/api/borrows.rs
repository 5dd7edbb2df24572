//! Borrow endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::borrow_log::{BorrowLog, BorrowLogDetails, NewBorrow},
};

use super::{ApiJson, ApiResponse, Borrower, RequireAdmin};

/// Borrow request body. Field types are strict: a non-numeric `bookId`
/// or coordinate is rejected as a validation error, never coerced.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    /// ID of the book to borrow
    pub book_id: i32,
    /// Borrower latitude at borrow time
    pub latitude: f64,
    /// Borrower longitude at borrow time
    pub longitude: f64,
}

/// Book summary returned with a successful borrow
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Stock left after this borrow
    pub remaining_stock: i32,
}

/// Successful borrow payload
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowReceipt {
    pub borrow_log: BorrowLog,
    pub book: BorrowedBook,
}

/// Borrow a book (user capability required)
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "borrow",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Book borrowed", body = ApiResponse<BorrowReceipt>),
        (status = 400, description = "Invalid input or book out of stock", body = crate::error::ErrorResponse),
        (status = 403, description = "User capability required", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Borrower { user_id }: Borrower,
    ApiJson(request): ApiJson<BorrowRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BorrowReceipt>>)> {
    let (book, log) = state
        .services
        .borrows
        .borrow_book(NewBorrow {
            user_id,
            book_id: request.book_id,
            latitude: request.latitude,
            longitude: request.longitude,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Book borrowed successfully",
            BorrowReceipt {
                borrow_log: log,
                book: BorrowedBook {
                    id: book.id,
                    title: book.title,
                    author: book.author,
                    remaining_stock: book.stock,
                },
            },
        )),
    ))
}

/// List all borrow logs, newest first (admin only)
#[utoipa::path(
    get,
    path = "/borrow/logs",
    tag = "borrow",
    responses(
        (status = 200, description = "All borrow logs with book references", body = ApiResponse<Vec<BorrowLogDetails>>),
        (status = 403, description = "Admin capability required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrow_logs(
    State(state): State<crate::AppState>,
    RequireAdmin: RequireAdmin,
) -> AppResult<Json<ApiResponse<Vec<BorrowLogDetails>>>> {
    let logs = state.services.borrows.list_logs().await?;
    Ok(Json(ApiResponse::data(logs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_request_uses_camel_case() {
        let request: BorrowRequest =
            serde_json::from_str(r#"{"bookId": 1, "latitude": 1.0, "longitude": 2.0}"#).unwrap();
        assert_eq!(request.book_id, 1);
    }

    #[test]
    fn borrow_request_rejects_missing_book_id() {
        let result: Result<BorrowRequest, _> =
            serde_json::from_str(r#"{"latitude": 1.0, "longitude": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn borrow_request_rejects_non_numeric_book_id() {
        let result: Result<BorrowRequest, _> =
            serde_json::from_str(r#"{"bookId": "abc", "latitude": 1.0, "longitude": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn borrow_request_rejects_missing_coordinates() {
        let result: Result<BorrowRequest, _> = serde_json::from_str(r#"{"bookId": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn receipt_exposes_remaining_stock() {
        let receipt = BorrowedBook {
            id: 1,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            remaining_stock: 0,
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["remainingStock"], 0);
    }
}

//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::{ApiJson, ApiResponse, RequireAdmin};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = ApiResponse<Vec<Book>>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(ApiResponse::data(books)))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(ApiResponse::data(book)))
}

/// Create a new book (admin only)
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = ApiResponse<Book>),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 403, description = "Admin capability required", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    RequireAdmin: RequireAdmin,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let created = state.services.catalog.create_book(book).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Book created successfully", created)),
    ))
}

/// Update an existing book (admin only, partial update)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<Book>),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    RequireAdmin: RequireAdmin,
    Path(id): Path<i32>,
    ApiJson(patch): ApiJson<UpdateBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let updated = state.services.catalog.update_book(id, patch).await?;
    Ok(Json(ApiResponse::with_message("Book updated successfully", updated)))
}

/// Delete a book (admin only, hard delete)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponse<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    RequireAdmin: RequireAdmin,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Book>>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(ApiResponse::message_only("Book deleted successfully")))
}

//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Header carrying the caller-asserted role (`admin` or `user`)
pub const ROLE_HEADER: &str = "x-user-role";
/// Header carrying the caller-asserted numeric identity
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor asserting the admin capability.
///
/// SECURITY: the role is read from an unauthenticated request header with no
/// credential verification. This service must only be reachable through a
/// gateway that authenticates callers and strips inbound `x-user-*` headers;
/// to stand alone it needs this extractor swapped for a real token check.
pub struct RequireAdmin;

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok());

        if role == Some("admin") {
            Ok(RequireAdmin)
        } else {
            Err(AppError::Forbidden("Access denied. Admin only.".to_string()))
        }
    }
}

/// Extractor asserting the user capability plus a numeric identity.
///
/// Same trust boundary as [`RequireAdmin`]: the identity is caller-asserted.
/// A malformed (non-integer) `x-user-id` is treated as a missing identity.
pub struct Borrower {
    pub user_id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for Borrower
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let denied =
            || AppError::Forbidden("Access denied. User authentication required.".to_string());

        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok());

        if role != Some("user") {
            return Err(denied());
        }

        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i32>().ok())
            .ok_or_else(denied)?;

        Ok(Borrower { user_id })
    }
}

/// JSON body extractor that reports malformed input through the error
/// envelope as a validation failure instead of the framework default.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}

/// Success envelope shared by every endpoint
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Always `true`
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn admin_header_grants_admin() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "admin")]);
        assert!(RequireAdmin::from_request_parts(&mut parts, &()).await.is_ok());
    }

    #[tokio::test]
    async fn missing_role_is_forbidden() {
        let mut parts = parts_with_headers(&[]);
        assert!(RequireAdmin::from_request_parts(&mut parts, &()).await.is_err());
    }

    #[tokio::test]
    async fn user_role_is_not_admin() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "user")]);
        assert!(RequireAdmin::from_request_parts(&mut parts, &()).await.is_err());
    }

    #[tokio::test]
    async fn borrower_requires_role_and_id() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "user"), (USER_ID_HEADER, "7")]);
        let borrower = Borrower::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(borrower.user_id, 7);
    }

    #[tokio::test]
    async fn borrower_without_id_is_forbidden() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "user")]);
        assert!(Borrower::from_request_parts(&mut parts, &()).await.is_err());
    }

    #[tokio::test]
    async fn borrower_with_non_numeric_id_is_forbidden() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "user"), (USER_ID_HEADER, "seven")]);
        assert!(Borrower::from_request_parts(&mut parts, &()).await.is_err());
    }

    #[tokio::test]
    async fn admin_role_cannot_borrow() {
        let mut parts = parts_with_headers(&[(ROLE_HEADER, "admin"), (USER_ID_HEADER, "7")]);
        assert!(Borrower::from_request_parts(&mut parts, &()).await.is_err());
    }
}

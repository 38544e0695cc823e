//! REST client for the catalogue backend.
//!
//! One thin adapter owns URL resolution, the bearer header and response
//! decoding; pages only ever see typed results and [`ApiError`] kinds.

use bookshelf_shared::protocol::{
    BookPayload, CoverPrompt, CreatedBook, GeneratedCover, LoginRequest, RegisterRequest,
    TokenGrant, decode_payload,
};
use bookshelf_shared::BookRecord;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session;

const API_ROOT: &str = "/api/v1";

/// Failure kinds surfaced to page controllers. Nothing is retried; every
/// error is terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401: the session is missing or expired.
    Unauthorized,
    /// 403: the server refused the action for this user.
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// Any other non-2xx status.
    Server(u16),
    /// Transport-level failure before a response arrived.
    Network,
    /// 2xx response whose body could not be decoded.
    Malformed,
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "You need to sign in to continue."),
            ApiError::Forbidden => write!(f, "You do not have permission to do that."),
            ApiError::NotFound => write!(f, "The requested book could not be found."),
            ApiError::Server(status) => {
                write!(f, "The server returned an unexpected error ({status}).")
            }
            ApiError::Network => write!(f, "Could not reach the server. Check your connection."),
            ApiError::Malformed => write!(f, "The server response could not be understood."),
        }
    }
}

/// Maps a non-2xx status to its error kind.
pub fn error_for_status(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        other => ApiError::Server(other),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookshelfApi {
    base_url: String,
}

impl BookshelfApi {
    /// `base_url` may be empty for same-origin requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_ROOT, path)
    }

    // The session is re-read on every request so a cleared token never
    // outlives a page.
    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match session::stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::with_auth(builder)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        Self::decode(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::with_auth(builder)
            .json(body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(error_for_status(response.status()));
        }
        let body = response.text().await.map_err(|_| ApiError::Malformed)?;
        decode_payload(&body).map_err(|_| ApiError::Malformed)
    }

    pub async fn list_books(&self) -> Result<Vec<BookRecord>, ApiError> {
        Self::fetch(Request::get(&self.url("/books"))).await
    }

    pub async fn my_books(&self) -> Result<Vec<BookRecord>, ApiError> {
        Self::fetch(Request::get(&self.url("/books/user"))).await
    }

    pub async fn book(&self, id: i64) -> Result<BookRecord, ApiError> {
        Self::fetch(Request::get(&self.url(&format!("/books/{id}")))).await
    }

    pub async fn create_book(&self, payload: &BookPayload) -> Result<CreatedBook, ApiError> {
        Self::send_json(Request::post(&self.url("/books")), payload).await
    }

    /// The update response body is not needed; 2xx is success regardless of
    /// whether the server echoes the record or returns an empty body.
    pub async fn update_book(&self, id: i64, payload: &BookPayload) -> Result<(), ApiError> {
        let response = Self::with_auth(Request::put(&self.url(&format!("/books/{id}"))))
            .json(payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_for_status(response.status()))
        }
    }

    /// Delete answers 204 or an empty body on success.
    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        let response = Self::with_auth(Request::delete(&self.url(&format!("/books/{id}"))))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_for_status(response.status()))
        }
    }

    pub async fn generate_cover(&self, id: i64, prompt: String) -> Result<GeneratedCover, ApiError> {
        Self::send_json(
            Request::post(&self.url(&format!("/books/gen/{id}"))),
            &CoverPrompt { prompt },
        )
        .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenGrant, ApiError> {
        Self::send_json(Request::post(&self.url("/auth/login")), request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/auth/register"))
            .json(request)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_for_status(response.status()))
        }
    }
}

/// The API client is provided once at the app root.
pub fn use_api() -> BookshelfApi {
    use_context::<BookshelfApi>().expect("BookshelfApi should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_distinct_kinds() {
        assert_eq!(error_for_status(401), ApiError::Unauthorized);
        assert_eq!(error_for_status(403), ApiError::Forbidden);
        assert_eq!(error_for_status(404), ApiError::NotFound);
        assert_eq!(error_for_status(500), ApiError::Server(500));
        assert_eq!(error_for_status(409), ApiError::Server(409));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = BookshelfApi::new("https://example.test/");
        assert_eq!(api.url("/books"), "https://example.test/api/v1/books");
        let relative = BookshelfApi::new("");
        assert_eq!(relative.url("/books/7"), "/api/v1/books/7");
    }

    #[test]
    fn messages_are_kind_specific() {
        assert_ne!(
            ApiError::Unauthorized.to_string(),
            ApiError::Forbidden.to_string()
        );
        assert!(ApiError::Server(502).to_string().contains("502"));
    }
}

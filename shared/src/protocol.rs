//! Request and response DTOs for the catalogue backend, plus the optional
//! `{status, message, data}` envelope some endpoints wrap their payload in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::serde_helper::lenient_id;

/// Standard response envelope. Endpoints are inconsistent about using it, so
/// decoding always goes through [`decode_payload`] which accepts both forms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Wrapped(ApiEnvelope<T>),
    Bare(T),
}

/// Decodes a response body, unwrapping the envelope when present.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    Ok(match serde_json::from_str::<Payload<T>>(body)? {
        Payload::Wrapped(envelope) => envelope.data,
        Payload::Bare(value) => value,
    })
}

/// Body for `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Manually entered cover URL; omitted when blank so the server keeps
    /// whatever it already has.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Create response. The id is all the client needs; a success body without
/// one fails the create flow with a visible message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedBook {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login payload: a bearer token and the id used for ownership
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
}

/// Body for `POST /books/gen/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverPrompt {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCover {
    #[serde(default)]
    pub book_cover_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookRecord;

    #[test]
    fn bare_record_decodes_without_envelope() {
        let body = r#"{"id": 3, "title": "Dune", "bookCoverUrl": "https://img/d"}"#;
        let record: BookRecord = decode_payload(body).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.book_cover_url.as_deref(), Some("https://img/d"));
    }

    #[test]
    fn enveloped_record_is_unwrapped() {
        let body = r#"{"status": 200, "message": "success", "data": {"id": 42, "title": "T"}}"#;
        let record: BookRecord = decode_payload(body).unwrap();
        assert_eq!(record.id, 42);
    }

    #[test]
    fn enveloped_and_bare_lists_both_decode() {
        let bare = r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]"#;
        let wrapped = r#"{"status": 200, "message": "ok", "data": [{"id": 1, "title": "A"}]}"#;
        let a: Vec<BookRecord> = decode_payload(bare).unwrap();
        let b: Vec<BookRecord> = decode_payload(wrapped).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(decode_payload::<BookRecord>("<html>oops</html>").is_err());
    }

    #[test]
    fn created_book_tolerates_missing_id() {
        let with: CreatedBook = decode_payload(r#"{"data": {"id": 42}}"#).unwrap();
        assert_eq!(with.id, Some(42));
        let without: CreatedBook = decode_payload(r#"{"data": {"title": "T"}}"#).unwrap();
        assert_eq!(without.id, None);
    }

    #[test]
    fn token_grant_accepts_string_user_ids() {
        let grant: TokenGrant =
            decode_payload(r#"{"data": {"token": "abc", "userId": "17"}}"#).unwrap();
        assert_eq!(grant.token.as_deref(), Some("abc"));
        assert_eq!(grant.user_id, Some(17));
    }

    #[test]
    fn book_payload_omits_blank_cover() {
        let payload = BookPayload {
            title: "T".into(),
            author: String::new(),
            description: "D".into(),
            cover_url: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("coverUrl"));
    }
}

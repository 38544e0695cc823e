//! Book records as the server sends them, and the normalized view model the
//! UI renders.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::serde_helper::lenient_id;

/// A book exactly as a backend response carries it.
///
/// Different backend revisions expose the cover image under different names
/// (`coverUrl`, `coverImageUrl`, `thumbnail`, `bookCoverUrl`) and the owner
/// under `userId` or `ownerId`. All aliases are kept here so the mapper can
/// collapse them; nothing outside the mapper should touch this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub book_cover_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Display-ready book: exactly one field name per concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    /// Canonical cover URL; empty string when the record has none.
    pub thumbnail: String,
    pub owner_id: Option<i64>,
    pub created_at: Option<String>,
}

impl Book {
    /// Normalizes a server record. Cover aliases are resolved in priority
    /// order, the owner id falls back from `userId` to `ownerId`, and blank
    /// optional strings are dropped.
    pub fn from_record(record: BookRecord) -> Self {
        let thumbnail = [
            record.cover_url,
            record.cover_image_url,
            record.thumbnail,
            record.book_cover_url,
        ]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or_default();

        Book {
            id: record.id,
            title: record.title,
            author: non_blank(record.author),
            description: non_blank(record.description),
            thumbnail,
            owner_id: record.user_id.or(record.owner_id),
            created_at: non_blank(record.created_at),
        }
    }

    pub fn has_cover(&self) -> bool {
        !self.thumbnail.is_empty()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whether the signed-in user owns the book. The server remains the
/// authority; this only gates UI affordances.
pub fn is_owner(session_user_id: Option<i64>, book: &Book) -> bool {
    match (session_user_id, book.owner_id) {
        (Some(user), Some(owner)) => user == owner,
        _ => false,
    }
}

/// Orders books newest-first: items with `createdAt` before those without,
/// `createdAt` descending among the former, `id` descending as the fallback
/// and tie-break.
pub fn sort_newest_first(books: &mut [Book]) {
    books.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(a_at), Some(b_at)) => {
            compare_timestamps(b_at, a_at).then_with(|| b.id.cmp(&a.id))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    });
}

fn compare_timestamps(lhs: &str, rhs: &str) -> Ordering {
    match (parse_timestamp(lhs), parse_timestamp(rhs)) {
        (Some(l), Some(r)) => l.cmp(&r),
        // Not every backend emits RFC 3339; ISO-like strings still order
        // correctly lexicographically.
        _ => lhs.cmp(rhs),
    }
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> BookRecord {
        BookRecord {
            id,
            title: format!("Book {id}"),
            author: None,
            description: None,
            cover_url: None,
            cover_image_url: None,
            thumbnail: None,
            book_cover_url: None,
            user_id: None,
            owner_id: None,
            created_at: None,
        }
    }

    fn book(id: i64, created_at: Option<&str>) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author: None,
            description: None,
            thumbnail: String::new(),
            owner_id: None,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn every_cover_alias_maps_to_the_same_canonical_field() {
        for set in [
            |r: &mut BookRecord| r.cover_url = Some("https://img/c".into()),
            |r: &mut BookRecord| r.cover_image_url = Some("https://img/c".into()),
            |r: &mut BookRecord| r.thumbnail = Some("https://img/c".into()),
            |r: &mut BookRecord| r.book_cover_url = Some("https://img/c".into()),
        ] {
            let mut rec = record(1);
            set(&mut rec);
            assert_eq!(Book::from_record(rec).thumbnail, "https://img/c");
        }
    }

    #[test]
    fn cover_aliases_resolve_in_priority_order() {
        let mut rec = record(1);
        rec.cover_image_url = Some("second".into());
        rec.book_cover_url = Some("last".into());
        assert_eq!(Book::from_record(rec).thumbnail, "second");
    }

    #[test]
    fn no_cover_alias_yields_empty_string() {
        let mut rec = record(1);
        rec.thumbnail = Some("   ".into());
        let book = Book::from_record(rec);
        assert_eq!(book.thumbnail, "");
        assert!(!book.has_cover());
    }

    #[test]
    fn blank_optionals_are_dropped_without_panicking() {
        let mut rec = record(1);
        rec.author = Some(String::new());
        rec.description = Some("  ".into());
        let book = Book::from_record(rec);
        assert_eq!(book.author, None);
        assert_eq!(book.description, None);
    }

    #[test]
    fn owner_id_falls_back_from_user_id_to_owner_id() {
        let mut rec = record(1);
        rec.owner_id = Some(9);
        assert_eq!(Book::from_record(rec.clone()).owner_id, Some(9));
        rec.user_id = Some(4);
        assert_eq!(Book::from_record(rec).owner_id, Some(4));
    }

    #[test]
    fn ownership_requires_a_matching_signed_in_user() {
        let mut owned = book(1, None);
        owned.owner_id = Some(7);
        assert!(is_owner(Some(7), &owned));
        assert!(!is_owner(Some(8), &owned));
        assert!(!is_owner(None, &owned));
        let orphan = book(2, None);
        assert!(!is_owner(Some(7), &orphan));
    }

    #[test]
    fn sorts_by_created_at_descending_when_all_present() {
        let mut books = vec![
            book(1, Some("2024-01-02T09:00:00Z")),
            book(2, Some("2024-03-01T09:00:00Z")),
            book(3, Some("2024-02-10T09:00:00Z")),
        ];
        sort_newest_first(&mut books);
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sorts_by_id_descending_when_no_created_at() {
        let mut books = vec![book(5, None), book(12, None), book(9, None)];
        sort_newest_first(&mut books);
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![12, 9, 5]);
    }

    #[test]
    fn mixed_presence_puts_undated_books_last() {
        let mut books = vec![
            book(30, None),
            book(1, Some("2024-05-01T00:00:00Z")),
            book(20, None),
            book(2, Some("2024-06-01T00:00:00Z")),
        ];
        sort_newest_first(&mut books);
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1, 30, 20]);
    }

    #[test]
    fn naive_timestamps_still_order_chronologically() {
        let mut books = vec![
            book(1, Some("2024-01-05T08:30:00")),
            book(2, Some("2024-01-05T10:15:00")),
        ];
        sort_newest_first(&mut books);
        assert_eq!(books[0].id, 2);
    }
}

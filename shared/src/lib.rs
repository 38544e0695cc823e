//! Domain types shared across the Bookshelf client.
//!
//! Everything in this crate is plain data plus pure functions: server record
//! shapes, the view-model mapper, list ordering and the request/response
//! protocol. No browser or network dependency, so all of it runs on the host.

pub mod book;
pub mod protocol;
mod serde_helper;

pub use book::{Book, BookRecord, is_owner, sort_newest_first};
pub use protocol::{
    ApiEnvelope, BookPayload, CoverPrompt, CreatedBook, GeneratedCover, LoginRequest,
    RegisterRequest, TokenGrant, decode_payload,
};

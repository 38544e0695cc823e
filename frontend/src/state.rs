//! The shared load-phase state machine every fetching page instantiates.

use crate::api::ApiError;
use crate::session::SessionContext;

/// `Loading → {Ready | AuthRequired | NotFound | Forbidden | Failed}`.
///
/// The terminal error states retain no data; `Ready` holds the mapped
/// view-model for the rest of the page's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    AuthRequired,
    NotFound,
    Forbidden,
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::Unauthorized => FetchState::AuthRequired,
            ApiError::Forbidden => FetchState::Forbidden,
            ApiError::NotFound => FetchState::NotFound,
            other => FetchState::Failed(other.to_string()),
        }
    }

    /// Resolves a finished fetch. A 401 also clears the stored session
    /// (logout-on-expiry); the page renders a sign-in prompt instead of
    /// redirecting, so browser history is preserved.
    pub fn resolve(result: Result<T, ApiError>, session: &SessionContext) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(error) => {
                if error == ApiError::Unauthorized {
                    session.expire();
                }
                Self::from_error(&error)
            }
        }
    }
}

/// Submit-phase error message, specific to the failure kind. A 403 on a
/// destructive action gets its own wording.
pub fn submit_error_message(error: &ApiError, forbidden_hint: &str) -> String {
    match error {
        ApiError::Forbidden => forbidden_hint.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_becomes_auth_required() {
        assert_eq!(
            FetchState::<()>::from_error(&ApiError::Unauthorized),
            FetchState::AuthRequired
        );
    }

    #[test]
    fn forbidden_and_not_found_are_render_only_states() {
        assert_eq!(
            FetchState::<()>::from_error(&ApiError::Forbidden),
            FetchState::Forbidden
        );
        assert_eq!(
            FetchState::<()>::from_error(&ApiError::NotFound),
            FetchState::NotFound
        );
    }

    #[test]
    fn remaining_kinds_carry_their_message() {
        match FetchState::<()>::from_error(&ApiError::Network) {
            FetchState::Failed(msg) => assert_eq!(msg, ApiError::Network.to_string()),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn forbidden_submit_uses_the_action_specific_hint() {
        let msg = submit_error_message(&ApiError::Forbidden, "No deleting other people's books.");
        assert_eq!(msg, "No deleting other people's books.");
        let passthrough = submit_error_message(&ApiError::NotFound, "unused");
        assert_eq!(passthrough, ApiError::NotFound.to_string());
    }
}

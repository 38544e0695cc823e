//! Session state: the persisted `token`/`userId` pair.
//!
//! This module is the only owner of the credential storage keys. Pages read
//! the reactive context; the HTTP adapter re-reads storage per request so a
//! cleared token is never reused.

use leptos::prelude::*;

use crate::web::LocalStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Used for ownership checks; login responses may omit it.
    pub user_id: Option<i64>,
}

/// Builds a session from raw storage values. Pure so the lifecycle rules are
/// testable without a browser.
fn from_parts(token: Option<String>, user_id: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    let user_id = user_id.and_then(|raw| raw.trim().parse().ok());
    Some(Session { token, user_id })
}

/// Reads the persisted session, if any.
pub fn load() -> Option<Session> {
    from_parts(LocalStorage::get(TOKEN_KEY), LocalStorage::get(USER_ID_KEY))
}

/// Token as stored right now; attached to authenticated requests.
pub fn stored_token() -> Option<String> {
    load().map(|session| session.token)
}

/// Reactive session handle shared through the leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<Option<Session>>,
    set_state: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(load());
        Self { state, set_state }
    }

    /// Signal injected into the router guard.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_some())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.state.get_untracked().and_then(|session| session.user_id)
    }

    /// Persists the credential pair and flips the reactive state.
    pub fn sign_in(&self, token: String, user_id: Option<i64>) {
        LocalStorage::set(TOKEN_KEY, &token);
        match user_id {
            Some(id) => {
                LocalStorage::set(USER_ID_KEY, &id.to_string());
            }
            None => LocalStorage::delete(USER_ID_KEY),
        }
        self.set_state.set(Some(Session { token, user_id }));
    }

    /// Clears both keys together; partial sessions are never left behind.
    pub fn sign_out(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_ID_KEY);
        self.set_state.set(None);
    }

    /// Logout-on-expiry: invoked when an authenticated call answers 401.
    pub fn expire(&self) {
        web_sys::console::warn_1(&"[Session] authentication expired, clearing credentials".into());
        self.sign_out();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_user_id_form_a_session() {
        let session = from_parts(Some("tok".into()), Some("12".into())).unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user_id, Some(12));
    }

    #[test]
    fn absent_or_blank_token_means_unauthenticated() {
        assert_eq!(from_parts(None, Some("12".into())), None);
        assert_eq!(from_parts(Some("  ".into()), Some("12".into())), None);
    }

    #[test]
    fn unparseable_user_id_keeps_the_token_but_no_ownership() {
        let session = from_parts(Some("tok".into()), Some("abc".into())).unwrap();
        assert_eq!(session.user_id, None);
        let missing = from_parts(Some("tok".into()), None).unwrap();
        assert_eq!(missing.user_id, None);
    }
}

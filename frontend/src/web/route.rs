//! Route definitions. Pure domain model: no DOM or web_sys dependency.

use std::fmt::Display;

/// Every page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Books,
    BookNew,
    BookDetail(i64),
    BookEdit(i64),
    GenerateCover(i64),
    Login,
    Signup,
    MyBooks,
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["books"] => Self::Books,
            ["books", "new"] => Self::BookNew,
            ["books", id] => match id.parse() {
                Ok(id) => Self::BookDetail(id),
                Err(_) => Self::NotFound,
            },
            ["books", id, "edit"] => match id.parse() {
                Ok(id) => Self::BookEdit(id),
                Err(_) => Self::NotFound,
            },
            ["images", id] => match id.parse() {
                Ok(id) => Self::GenerateCover(id),
                Err(_) => Self::NotFound,
            },
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["my", "books"] => Self::MyBooks,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Books => "/books".to_string(),
            Self::BookNew => "/books/new".to_string(),
            Self::BookDetail(id) => format!("/books/{id}"),
            Self::BookEdit(id) => format!("/books/{id}/edit"),
            Self::GenerateCover(id) => format!("/images/{id}"),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::MyBooks => "/my/books".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Routes that redirect straight to login when no session exists at
    /// mount. Everything else renders an inline sign-in prompt instead, so
    /// browser history is not lost.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::MyBooks)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_to_their_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/books"), AppRoute::Books);
        assert_eq!(AppRoute::from_path("/books/new"), AppRoute::BookNew);
        assert_eq!(AppRoute::from_path("/books/42"), AppRoute::BookDetail(42));
        assert_eq!(AppRoute::from_path("/books/42/edit"), AppRoute::BookEdit(42));
        assert_eq!(AppRoute::from_path("/images/7"), AppRoute::GenerateCover(7));
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/signup"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/my/books"), AppRoute::MyBooks);
    }

    #[test]
    fn unknown_or_malformed_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/books/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/books/1/2/3"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/images/xyz"), AppRoute::NotFound);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(AppRoute::from_path("/books?page=2"), AppRoute::Books);
        assert_eq!(AppRoute::from_path("/books/9#top"), AppRoute::BookDetail(9));
    }

    #[test]
    fn parse_and_print_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Books,
            AppRoute::BookNew,
            AppRoute::BookDetail(3),
            AppRoute::BookEdit(3),
            AppRoute::GenerateCover(3),
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::MyBooks,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn only_the_owned_list_redirects_at_mount() {
        assert!(AppRoute::MyBooks.requires_auth());
        assert!(!AppRoute::Books.requires_auth());
        assert!(!AppRoute::BookDetail(1).requires_auth());
        assert!(!AppRoute::BookNew.requires_auth());
    }
}

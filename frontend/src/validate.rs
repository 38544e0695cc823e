//! Synchronous client-side validation. Runs before any network call; a
//! failure keeps the page in its form state with field-level annotations.

/// Field-level errors for the book form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookFieldErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl BookFieldErrors {
    pub fn is_clean(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

pub fn check_book_input(title: &str, description: &str) -> BookFieldErrors {
    BookFieldErrors {
        title: title.trim().is_empty().then_some("Title is required."),
        description: description
            .trim()
            .is_empty()
            .then_some("Description is required."),
    }
}

/// Signup form check; returns the first problem found.
pub fn check_signup_input(
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Some("Please fill in all fields.");
    }
    if password != password_confirm {
        return Some("Passwords do not match.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_and_description_yield_two_field_errors() {
        let errors = check_book_input("", "   ");
        assert!(errors.title.is_some());
        assert!(errors.description.is_some());
        assert!(!errors.is_clean());
    }

    #[test]
    fn filled_required_fields_pass() {
        assert!(check_book_input("T", "D").is_clean());
    }

    #[test]
    fn whitespace_only_title_is_still_an_error() {
        let errors = check_book_input("  \t", "fine");
        assert!(errors.title.is_some());
        assert!(errors.description.is_none());
    }

    #[test]
    fn signup_requires_all_fields_and_matching_passwords() {
        assert!(check_signup_input("", "a@b", "pw", "pw").is_some());
        assert_eq!(
            check_signup_input("n", "a@b", "pw", "other"),
            Some("Passwords do not match.")
        );
        assert_eq!(check_signup_input("n", "a@b", "pw", "pw"), None);
    }
}

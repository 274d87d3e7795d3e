//! Cache key generators.
//!
//! Keys are the lookup values themselves, so an id, an email, and a page
//! share one key space.

/// Key for a user looked up by identifier.
#[must_use]
pub fn user_by_id(id: &str) -> String {
    id.to_string()
}

/// Key for a user looked up by email.
#[must_use]
pub fn user_by_email(email: &str) -> String {
    email.to_string()
}

/// Key for one page of users.
#[must_use]
pub fn users_by_page(page: &str, per_page: &str) -> String {
    format!("{page}_{per_page}")
}

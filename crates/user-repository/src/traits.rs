//! Repository port.

use async_trait::async_trait;
use user_core::{AppResult, User, UserId, UserUpdate};

/// Persistence contract for users.
///
/// Implementations wrap every store failure in the matching error kind.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns its identifier in canonical form.
    async fn create_user(&self, user: &User) -> AppResult<String>;

    /// Returns one page of users ordered by creation time, oldest first.
    ///
    /// Pages are 1-based; an empty page is an empty vector.
    async fn get_users_by_page_and_per_page(&self, page: i64, per_page: i64) -> AppResult<Vec<User>>;

    /// Fails with `NotFound` when no user has this identifier.
    async fn get_user_by_id(&self, id: UserId) -> AppResult<User>;

    /// Fails with `StoreRead` when no user has this email.
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Applies the profile update and returns the stored email.
    async fn update_user_by_id(&self, update: &UserUpdate) -> AppResult<String>;

    /// Removes the user for good.
    async fn drop_user_by_id(&self, id: UserId) -> AppResult<()>;
}

/// Number of records to skip for a 1-based page.
#[must_use]
pub const fn page_offset(page: i64, per_page: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(1, 25), 0);
        assert_eq!(page_offset(3, 0), 0);
    }

    #[test]
    fn test_page_zero_is_negative_window() {
        assert_eq!(page_offset(0, 10), -10);
    }
}

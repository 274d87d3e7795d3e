//! User entity and the votes attached to it.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single vote recorded against a user.
///
/// Votes have no identity of their own; they live inside the owning [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The user on the other side of the vote.
    pub voted_id: UserId,
    /// Signed vote value.
    pub vote: i32,
    pub voted_at: DateTime<Utc>,
}

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned at creation, never changes.
    pub id: UserId,

    pub email: String,

    pub user_name: String,

    pub first_name: String,

    pub last_name: String,

    /// Password hash; the plaintext is never stored.
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Free-text role, stored but not enforced.
    pub role: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Declared for soft deletes; current operations delete for real.
    pub deleted_at: Option<DateTime<Utc>>,

    pub voted_at: Option<DateTime<Utc>>,

    pub votes: Vec<Vote>,
}

impl User {
    /// Creates a new user with a fresh identifier and creation timestamps.
    #[must_use]
    pub fn new(
        email: String,
        user_name: String,
        first_name: String,
        last_name: String,
        password: String,
        role: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            user_name,
            first_name,
            last_name,
            password,
            role,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            voted_at: None,
            votes: Vec::new(),
        }
    }

    /// Sum of all vote values. Computed on read, never persisted.
    #[must_use]
    pub fn rating(&self) -> i32 {
        self.votes.iter().map(|v| v.vote).sum()
    }

    /// Applies a profile update in memory.
    ///
    /// Mirrors the store's `$set` update: email, user name, first and last
    /// name, and `updated_at` are replaced; id, password, role, votes and
    /// `created_at` are left alone. In-memory repositories use this to
    /// behave like the persistent one.
    pub fn apply(&mut self, update: &UserUpdate) {
        self.email.clone_from(&update.email);
        self.user_name.clone_from(&update.user_name);
        self.first_name.clone_from(&update.first_name);
        self.last_name.clone_from(&update.last_name);
        self.updated_at = update.updated_at;
    }
}

/// Partial user carrying the fields an update may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    /// Creates an update stamped with the current time.
    #[must_use]
    pub fn new(
        id: UserId,
        email: String,
        user_name: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            email,
            user_name,
            first_name,
            last_name,
            updated_at: Utc::now(),
        }
    }
}

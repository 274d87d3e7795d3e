//! User-related DTOs.
//!
//! Responses double as cache payloads, serialized as JSON. Missing fields
//! decode to their zero value so payloads that omit empty fields still load.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub email: String,

    pub user_name: String,

    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,

    pub last_name: String,

    /// Plaintext; hashed before it reaches the store.
    pub password: String,

    pub role: String,
}

/// Request to update a user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserByIdRequest {
    /// Canonical UUID string.
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request to delete a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropUserByIdRequest {
    pub id: String,
}

/// A user looked up by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserByIdResponse {
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
}

/// A user looked up by email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserByEmailResponse {
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
}

/// One entry of a paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
}

/// One page of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUsersByPaginationResponse {
    pub users: Vec<UserSummary>,
    /// Echo of the requested page.
    pub page: String,
    /// Echo of the requested page size.
    pub per_page: String,
    /// Number of users on this page, not across the collection.
    pub total_users: i32,
}

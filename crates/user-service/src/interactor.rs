//! User interactor trait definition.

use crate::dto::{
    CreateUserRequest, DropUserByIdRequest, GetUserByEmailResponse, GetUserByIdResponse,
    GetUsersByPaginationResponse, UpdateUserByIdRequest,
};
use async_trait::async_trait;
use user_core::AppResult;

/// User use cases.
///
/// Reads go through the cache; writes go straight to the repository.
#[async_trait]
pub trait UserInteractor: Send + Sync {
    /// Creates a user and returns its identifier.
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<String>;

    /// Returns one page of users. `page` and `per_page` arrive as decimal strings.
    async fn get_users_by_page_and_per_page(
        &self,
        page: &str,
        per_page: &str,
    ) -> AppResult<GetUsersByPaginationResponse>;

    async fn get_user_by_id(&self, id: &str) -> AppResult<GetUserByIdResponse>;

    async fn get_user_by_email(&self, email: &str) -> AppResult<GetUserByEmailResponse>;

    /// Updates a user's profile and returns the stored email.
    async fn update_user_by_id(&self, request: UpdateUserByIdRequest) -> AppResult<String>;

    async fn drop_user_by_id(&self, request: DropUserByIdRequest) -> AppResult<()>;
}

//! User interactor implementation.

use crate::cache::{cache_keys, UserCache};
use crate::dto::{
    CreateUserRequest, DropUserByIdRequest, GetUserByEmailResponse, GetUserByIdResponse,
    GetUsersByPaginationResponse, UpdateUserByIdRequest,
};
use crate::interactor::UserInteractor;
use crate::mappers;
use async_trait::async_trait;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use user_core::{AppResult, ErrorKind, UserId};
use user_repository::UserRepository;
use user_security::PasswordHasherInterface;

/// Lifetime of every cached read.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

/// Cache-aside user interactor.
///
/// Updates and deletes do not touch the cache, so a cached read may lag a
/// write by up to [`CACHE_TTL`].
pub struct UserInteractorImpl {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn UserCache>,
    password_hasher: Arc<dyn PasswordHasherInterface>,
}

impl UserInteractorImpl {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn UserCache>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
    ) -> Self {
        Self {
            repository,
            cache,
            password_hasher,
        }
    }

    /// Serves `key` from the cache, or from `fetch` on a miss.
    ///
    /// A hit is decoded with `decode`. A miss runs `fetch` and writes the
    /// result back with [`CACHE_TTL`]; if that write fails the read fails.
    /// Any other cache failure is returned as is.
    async fn read_through<T, D, F, Fut>(&self, key: &str, decode: D, fetch: F) -> AppResult<T>
    where
        T: Serialize + Send,
        D: FnOnce(&str) -> AppResult<T> + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<T>> + Send,
    {
        match self.cache.get(key).await {
            Ok(payload) => decode(&payload).map_err(|e| {
                error!("Cannot decode cached response. Key: {}; Err: {}", key, e);
                e
            }),
            Err(e) if e.is(ErrorKind::CacheMiss) => {
                let response = fetch().await?;
                let payload = mappers::to_cached(&response)?;
                self.cache.set_with_expiration(key, &payload, CACHE_TTL).await?;
                info!("Cached response for key '{}'", key);
                Ok(response)
            }
            Err(e) => Err(e),
        }
    }
}

fn parse_number(value: &str, field: &str) -> AppResult<i64> {
    value.parse::<i64>().map_err(|e| {
        ErrorKind::Parse
            .error("Failed GetUsersByPageAndPerPage")
            .with_context(format!("Cannot parse {field} to int. Err: {e}"))
    })
}

#[async_trait]
impl UserInteractor for UserInteractorImpl {
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<String> {
        debug!("Creating user: {}", request.user_name);

        let mut user = mappers::create_request_to_user(&request)?;
        user.password = self.password_hasher.hash(&user.password)?;

        let id = self.repository.create_user(&user).await?;

        info!("User created: {}", id);
        Ok(id)
    }

    async fn get_users_by_page_and_per_page(
        &self,
        page: &str,
        per_page: &str,
    ) -> AppResult<GetUsersByPaginationResponse> {
        debug!("Getting users page {} per page {}", page, per_page);

        let key = cache_keys::users_by_page(page, per_page);
        self.read_through(
            &key,
            mappers::cached_to_get_users_by_pagination_response,
            move || async move {
                let page_num = parse_number(page, "page")?;
                let per_page_num = parse_number(per_page, "per page")?;

                let users = self
                    .repository
                    .get_users_by_page_and_per_page(page_num, per_page_num)
                    .await?;

                Ok(mappers::users_to_get_users_by_pagination_response(
                    &users, page, per_page,
                ))
            },
        )
        .await
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<GetUserByIdResponse> {
        debug!("Getting user by id: {}", id);

        let key = cache_keys::user_by_id(id);
        self.read_through(
            &key,
            mappers::cached_to_get_user_by_id_response,
            move || async move {
                let user_id = UserId::parse(id)?;
                let user = self.repository.get_user_by_id(user_id).await?;
                Ok(mappers::user_to_get_user_by_id_response(&user))
            },
        )
        .await
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<GetUserByEmailResponse> {
        debug!("Getting user by email: {}", email);

        let key = cache_keys::user_by_email(email);
        self.read_through(
            &key,
            mappers::cached_to_get_user_by_email_response,
            move || async move {
                let user = self.repository.get_user_by_email(email).await?;
                Ok(mappers::user_to_get_user_by_email_response(&user))
            },
        )
        .await
    }

    async fn update_user_by_id(&self, request: UpdateUserByIdRequest) -> AppResult<String> {
        debug!("Updating user: {}", request.id);

        let update = mappers::update_request_to_user_update(&request)?;
        self.repository.update_user_by_id(&update).await
    }

    async fn drop_user_by_id(&self, request: DropUserByIdRequest) -> AppResult<()> {
        debug!("Deleting user: {}", request.id);

        let id = UserId::parse(&request.id)?;
        self.repository.drop_user_by_id(id).await
    }
}

impl std::fmt::Debug for UserInteractorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInteractorImpl").finish_non_exhaustive()
    }
}

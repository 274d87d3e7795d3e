//! Dependency wiring.
//!
//! The registry is built once at startup and constructs the graph bottom-up:
//! repository and cache feed the interactor, the interactor feeds the
//! gRPC service.

use std::sync::Arc;
use user_config::ServerConfig;
use user_core::AppResult;
use user_grpc::GrpcServer;
use user_repository::UserRepository;
use user_security::PasswordHasherInterface;
use user_service::{UserCache, UserInteractor, UserInteractorImpl};

#[derive(Clone)]
pub struct Registry {
    user_interactor: Arc<dyn UserInteractor>,
}

impl Registry {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn UserCache>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
    ) -> Self {
        let user_interactor = Arc::new(UserInteractorImpl::new(repository, cache, password_hasher));
        Self { user_interactor }
    }

    pub fn user_interactor(&self) -> Arc<dyn UserInteractor> {
        self.user_interactor.clone()
    }

    pub fn grpc_server(&self, config: &ServerConfig) -> AppResult<GrpcServer> {
        GrpcServer::new(config, self.user_interactor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tonic::Request;
    use user_core::{ErrorKind, User, UserId, UserUpdate};
    use user_grpc::proto::{self, user_service_server::UserService};
    use user_grpc::UserGrpcService;
    use user_security::PasswordHasher;

    #[derive(Default)]
    struct InMemoryRepository {
        users: Mutex<HashMap<UserId, User>>,
        reads: Mutex<usize>,
    }

    #[async_trait]
    impl UserRepository for InMemoryRepository {
        async fn create_user(&self, user: &User) -> AppResult<String> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user.id.to_string())
        }

        async fn get_users_by_page_and_per_page(&self, _page: i64, _per_page: i64) -> AppResult<Vec<User>> {
            *self.reads.lock().unwrap() += 1;
            Ok(self.users.lock().unwrap().values().cloned().collect())
        }

        async fn get_user_by_id(&self, id: UserId) -> AppResult<User> {
            *self.reads.lock().unwrap() += 1;
            self.users
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| ErrorKind::NotFound.error("Failed GetUserByID"))
        }

        async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
            *self.reads.lock().unwrap() += 1;
            self.users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned()
                .ok_or_else(|| ErrorKind::StoreRead.error("Failed GetUserByEmail"))
        }

        async fn update_user_by_id(&self, update: &UserUpdate) -> AppResult<String> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .get_mut(&update.id)
                .ok_or_else(|| ErrorKind::StoreWrite.error("Failed UpdateUserByID"))?;
            user.apply(update);
            Ok(user.email.clone())
        }

        async fn drop_user_by_id(&self, id: UserId) -> AppResult<()> {
            self.users
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ErrorKind::StoreWrite.error("Failed DropUserByID"))
        }
    }

    #[derive(Default)]
    struct InMemoryCache {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl UserCache for InMemoryCache {
        async fn get(&self, key: &str) -> AppResult<String> {
            self.entries
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| ErrorKind::CacheMiss.error("Failed RedisGet"))
        }

        async fn set_with_expiration(&self, key: &str, value: &str, _ttl: Duration) -> AppResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn create_registry(repository: Arc<InMemoryRepository>) -> Registry {
        Registry::new(
            repository,
            Arc::new(InMemoryCache::default()),
            Arc::new(PasswordHasher::new()),
        )
    }

    #[tokio::test]
    async fn test_registry_wires_service_through_cache() {
        let repository = Arc::new(InMemoryRepository::default());
        let service = UserGrpcService::new(create_registry(repository.clone()).user_interactor());

        let user_id = service
            .create_user(Request::new(proto::CreateUserRequest {
                email: "test@example.com".to_string(),
                user_name: "testuser".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                password: "password".to_string(),
                role: "user".to_string(),
            }))
            .await
            .unwrap()
            .into_inner()
            .user_id;

        let stored = repository
            .users
            .lock()
            .unwrap()
            .values()
            .next()
            .cloned()
            .unwrap();
        assert_ne!(stored.password, "password");

        for _ in 0..2 {
            let response = service
                .get_user_by_id(Request::new(proto::GetUserByIdRequest { id: user_id.clone() }))
                .await
                .unwrap()
                .into_inner();
            assert_eq!(response.email, "test@example.com");
        }
        assert_eq!(*repository.reads.lock().unwrap(), 1);

        let dropped = service
            .drop_user_by_id(Request::new(proto::DropUserByIdRequest { id: user_id }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(dropped.result, "the user has been deleted");
    }

    #[test]
    fn test_registry_builds_grpc_server() {
        let registry = create_registry(Arc::new(InMemoryRepository::default()));
        let server = registry.grpc_server(&ServerConfig::default()).unwrap();
        assert_eq!(server.addr().port(), 50051);
    }

    #[test]
    fn test_registry_rejects_bad_address() {
        let registry = create_registry(Arc::new(InMemoryRepository::default()));
        let config = ServerConfig {
            host: "not an address".to_string(),
            ..ServerConfig::default()
        };
        let err = registry.grpc_server(&config).err().unwrap();
        assert!(err.is(ErrorKind::ConfigLoad));
    }
}

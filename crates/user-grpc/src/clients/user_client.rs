//! Remote user service client via gRPC.

use crate::proto::{self, user_service_client::UserServiceClient};
use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::debug;
use user_core::{AppError, AppResult, ErrorKind};
use user_service::{
    CreateUserRequest, DropUserByIdRequest, GetUserByEmailResponse, GetUserByIdResponse,
    GetUsersByPaginationResponse, UpdateUserByIdRequest, UserInteractor,
};

/// Remote user service client that communicates via gRPC.
///
/// Implements [`UserInteractor`], so callers can swap it for a local
/// interactor. Every remote failure comes back as a `Controller` error.
#[derive(Clone)]
pub struct RemoteUserClient {
    client: UserServiceClient<Channel>,
}

impl RemoteUserClient {
    /// Connects to a user service at `addr` (e.g. `http://127.0.0.1:50051`).
    pub async fn connect(addr: impl Into<String>) -> AppResult<Self> {
        let addr = addr.into();
        let client = UserServiceClient::connect(addr.clone()).await.map_err(|e| {
            ErrorKind::Controller
                .error("Failed to connect to user service")
                .with_context(format!("{addr}: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Creates from an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: UserServiceClient::new(channel),
        }
    }
}

fn map_grpc_error(status: &tonic::Status) -> AppError {
    ErrorKind::Controller
        .error("gRPC call failed")
        .with_context(status.message())
}

#[async_trait]
impl UserInteractor for RemoteUserClient {
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<String> {
        debug!("Remote CreateUser: {}", request.user_name);

        let response = self
            .client
            .clone()
            .create_user(proto::CreateUserRequest::from(request))
            .await
            .map_err(|e| map_grpc_error(&e))?;

        Ok(response.into_inner().user_id)
    }

    async fn get_users_by_page_and_per_page(
        &self,
        page: &str,
        per_page: &str,
    ) -> AppResult<GetUsersByPaginationResponse> {
        debug!("Remote GetUsersByPagination: page={} per_page={}", page, per_page);

        let response = self
            .client
            .clone()
            .get_users_by_pagination(proto::GetUsersByPaginationRequest {
                page: page.to_string(),
                per_page: per_page.to_string(),
            })
            .await
            .map_err(|e| map_grpc_error(&e))?;

        Ok(response.into_inner().into())
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<GetUserByIdResponse> {
        debug!("Remote GetUserById: {}", id);

        let response = self
            .client
            .clone()
            .get_user_by_id(proto::GetUserByIdRequest { id: id.to_string() })
            .await
            .map_err(|e| map_grpc_error(&e))?;

        Ok(response.into_inner().into())
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<GetUserByEmailResponse> {
        debug!("Remote GetUserByEmail: {}", email);

        let response = self
            .client
            .clone()
            .get_user_by_email(proto::GetUserByEmailRequest {
                email: email.to_string(),
            })
            .await
            .map_err(|e| map_grpc_error(&e))?;

        Ok(response.into_inner().into())
    }

    async fn update_user_by_id(&self, request: UpdateUserByIdRequest) -> AppResult<String> {
        debug!("Remote UpdateUserByID: {}", request.id);

        let response = self
            .client
            .clone()
            .update_user_by_id(proto::UpdateUserByIdRequest::from(request))
            .await
            .map_err(|e| map_grpc_error(&e))?;

        Ok(response.into_inner().email)
    }

    async fn drop_user_by_id(&self, request: DropUserByIdRequest) -> AppResult<()> {
        debug!("Remote DropUserById: {}", request.id);

        let response = self
            .client
            .clone()
            .drop_user_by_id(proto::DropUserByIdRequest::from(request))
            .await
            .map_err(|e| map_grpc_error(&e))?;

        debug!("Remote DropUserById: {}", response.into_inner().result);
        Ok(())
    }
}

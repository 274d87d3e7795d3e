//! User gRPC service implementation.

use crate::proto;
use std::sync::Arc;
use tonic::metadata::AsciiMetadataValue;
use tonic::{Request, Response, Status};
use tracing::{debug, error};
use user_core::AppError;
use user_service::UserInteractor;

/// Metadata key carrying the stable error code of a failed call.
pub const ERROR_CODE_METADATA: &str = "x-error-code";

/// Reply sent after a successful delete.
pub const USER_DELETED: &str = "the user has been deleted";

/// User gRPC service implementation.
///
/// Thin adapter over a [`UserInteractor`]: reshapes requests and responses
/// and turns failures into statuses.
pub struct UserGrpcService {
    interactor: Arc<dyn UserInteractor>,
}

impl UserGrpcService {
    pub fn new(interactor: Arc<dyn UserInteractor>) -> Self {
        Self { interactor }
    }
}

#[tonic::async_trait]
impl proto::user_service_server::UserService for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<proto::CreateUserRequest>,
    ) -> Result<Response<proto::CreateUserResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateUser: {}", req.user_name);

        let user_id = self
            .interactor
            .create_user(req.into())
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::CreateUserResponse { user_id }))
    }

    async fn get_users_by_pagination(
        &self,
        request: Request<proto::GetUsersByPaginationRequest>,
    ) -> Result<Response<proto::GetUsersByPaginationResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUsersByPagination: page={} per_page={}", req.page, req.per_page);

        let response = self
            .interactor
            .get_users_by_page_and_per_page(&req.page, &req.per_page)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(response.into()))
    }

    async fn get_user_by_id(
        &self,
        request: Request<proto::GetUserByIdRequest>,
    ) -> Result<Response<proto::GetUserByIdResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUserById: {}", req.id);

        let response = self
            .interactor
            .get_user_by_id(&req.id)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(response.into()))
    }

    async fn get_user_by_email(
        &self,
        request: Request<proto::GetUserByEmailRequest>,
    ) -> Result<Response<proto::GetUserByEmailResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUserByEmail: {}", req.email);

        let response = self
            .interactor
            .get_user_by_email(&req.email)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(response.into()))
    }

    async fn update_user_by_id(
        &self,
        request: Request<proto::UpdateUserByIdRequest>,
    ) -> Result<Response<proto::UpdateUserByIdResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC UpdateUserByID: {}", req.id);

        let email = self
            .interactor
            .update_user_by_id(req.into())
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::UpdateUserByIdResponse { email }))
    }

    async fn drop_user_by_id(
        &self,
        request: Request<proto::DropUserByIdRequest>,
    ) -> Result<Response<proto::DropUserByIdResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC DropUserById: {}", req.id);

        self.interactor
            .drop_user_by_id(req.into())
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::DropUserByIdResponse {
            result: USER_DELETED.to_string(),
        }))
    }
}

/// Maps an application error to a gRPC status by its status hint.
///
/// The stable error code is attached under [`ERROR_CODE_METADATA`].
pub fn to_status(err: &AppError) -> Status {
    error!("gRPC error: {}", err);

    let message = err.to_string();
    let mut status = match err.status_code() {
        400 => Status::invalid_argument(message),
        403 => Status::permission_denied(message),
        404 => Status::not_found(message),
        409 => Status::already_exists(message),
        _ => Status::internal(message),
    };

    status
        .metadata_mut()
        .insert(ERROR_CODE_METADATA, AsciiMetadataValue::from_static(err.code()));
    status
}

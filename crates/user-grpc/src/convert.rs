//! Conversions between protobuf messages and service DTOs.

use crate::proto;
use user_service::{
    CreateUserRequest, DropUserByIdRequest, GetUserByEmailResponse, GetUserByIdResponse,
    GetUsersByPaginationResponse, UpdateUserByIdRequest, UserSummary,
};

impl From<proto::CreateUserRequest> for CreateUserRequest {
    fn from(req: proto::CreateUserRequest) -> Self {
        Self {
            email: req.email,
            user_name: req.user_name,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            role: req.role,
        }
    }
}

impl From<CreateUserRequest> for proto::CreateUserRequest {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            user_name: req.user_name,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            role: req.role,
        }
    }
}

impl From<proto::UpdateUserByIdRequest> for UpdateUserByIdRequest {
    fn from(req: proto::UpdateUserByIdRequest) -> Self {
        Self {
            id: req.id,
            email: req.email,
            user_name: req.user_name,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl From<UpdateUserByIdRequest> for proto::UpdateUserByIdRequest {
    fn from(req: UpdateUserByIdRequest) -> Self {
        Self {
            id: req.id,
            email: req.email,
            user_name: req.user_name,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl From<proto::DropUserByIdRequest> for DropUserByIdRequest {
    fn from(req: proto::DropUserByIdRequest) -> Self {
        Self { id: req.id }
    }
}

impl From<DropUserByIdRequest> for proto::DropUserByIdRequest {
    fn from(req: DropUserByIdRequest) -> Self {
        Self { id: req.id }
    }
}

impl From<GetUserByIdResponse> for proto::GetUserByIdResponse {
    fn from(res: GetUserByIdResponse) -> Self {
        Self {
            id: res.id,
            email: res.email,
            user_name: res.user_name,
            first_name: res.first_name,
            last_name: res.last_name,
            rating: res.rating,
        }
    }
}

impl From<proto::GetUserByIdResponse> for GetUserByIdResponse {
    fn from(res: proto::GetUserByIdResponse) -> Self {
        Self {
            id: res.id,
            email: res.email,
            user_name: res.user_name,
            first_name: res.first_name,
            last_name: res.last_name,
            rating: res.rating,
        }
    }
}

impl From<GetUserByEmailResponse> for proto::GetUserByEmailResponse {
    fn from(res: GetUserByEmailResponse) -> Self {
        Self {
            id: res.id,
            email: res.email,
            user_name: res.user_name,
            first_name: res.first_name,
            last_name: res.last_name,
            rating: res.rating,
        }
    }
}

impl From<proto::GetUserByEmailResponse> for GetUserByEmailResponse {
    fn from(res: proto::GetUserByEmailResponse) -> Self {
        Self {
            id: res.id,
            email: res.email,
            user_name: res.user_name,
            first_name: res.first_name,
            last_name: res.last_name,
            rating: res.rating,
        }
    }
}

impl From<UserSummary> for proto::User {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_name: user.user_name,
            first_name: user.first_name,
            last_name: user.last_name,
            rating: user.rating,
        }
    }
}

impl From<proto::User> for UserSummary {
    fn from(user: proto::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_name: user.user_name,
            first_name: user.first_name,
            last_name: user.last_name,
            rating: user.rating,
        }
    }
}

impl From<GetUsersByPaginationResponse> for proto::GetUsersByPaginationResponse {
    fn from(res: GetUsersByPaginationResponse) -> Self {
        Self {
            users: res.users.into_iter().map(proto::User::from).collect(),
            page: res.page,
            per_page: res.per_page,
            total_users: res.total_users,
        }
    }
}

impl From<proto::GetUsersByPaginationResponse> for GetUsersByPaginationResponse {
    fn from(res: proto::GetUsersByPaginationResponse) -> Self {
        Self {
            users: res.users.into_iter().map(UserSummary::from).collect(),
            page: res.page,
            per_page: res.per_page,
            total_users: res.total_users,
        }
    }
}

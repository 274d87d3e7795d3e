//! Entity-DTO mappers.
//!
//! Pure functions between wire requests, the user entity, and wire
//! responses, plus the JSON codec for cached responses.

use crate::dto::{
    CreateUserRequest, GetUserByEmailResponse, GetUserByIdResponse, GetUsersByPaginationResponse,
    UpdateUserByIdRequest, UserSummary,
};
use serde::{de::DeserializeOwned, Serialize};
use user_core::{AppResult, ErrorKind, User, UserId, UserUpdate};
use validator::Validate;

/// Builds a new user from a create request.
///
/// The password is copied as given; hashing is the caller's job.
pub fn create_request_to_user(request: &CreateUserRequest) -> AppResult<User> {
    request.validate()?;

    Ok(User::new(
        request.email.clone(),
        request.user_name.clone(),
        request.first_name.clone(),
        request.last_name.clone(),
        request.password.clone(),
        request.role.clone(),
    ))
}

/// Builds a profile update, failing with a conversion error on a bad id.
pub fn update_request_to_user_update(request: &UpdateUserByIdRequest) -> AppResult<UserUpdate> {
    let id = UserId::parse(&request.id)?;

    Ok(UserUpdate::new(
        id,
        request.email.clone(),
        request.user_name.clone(),
        request.first_name.clone(),
        request.last_name.clone(),
    ))
}

#[must_use]
pub fn user_to_get_user_by_id_response(user: &User) -> GetUserByIdResponse {
    GetUserByIdResponse {
        id: user.id.to_string(),
        email: user.email.clone(),
        user_name: user.user_name.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        rating: user.rating(),
    }
}

#[must_use]
pub fn user_to_get_user_by_email_response(user: &User) -> GetUserByEmailResponse {
    GetUserByEmailResponse {
        id: user.id.to_string(),
        email: user.email.clone(),
        user_name: user.user_name.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        rating: user.rating(),
    }
}

/// Builds a page response. `total_users` is the length of `users`.
#[must_use]
pub fn users_to_get_users_by_pagination_response(
    users: &[User],
    page: &str,
    per_page: &str,
) -> GetUsersByPaginationResponse {
    let users: Vec<UserSummary> = users
        .iter()
        .map(|user| UserSummary {
            id: user.id.to_string(),
            email: user.email.clone(),
            user_name: user.user_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            rating: user.rating(),
        })
        .collect();

    GetUsersByPaginationResponse {
        total_users: i32::try_from(users.len()).unwrap_or(i32::MAX),
        users,
        page: page.to_string(),
        per_page: per_page.to_string(),
    }
}

/// Serializes a response for the cache.
pub fn to_cached<T: Serialize>(response: &T) -> AppResult<String> {
    serde_json::to_string(response)
        .map_err(|e| ErrorKind::Unmarshal.error("Failed to encode cached response").with_context(e))
}

fn from_cached<T: DeserializeOwned>(payload: &str) -> AppResult<T> {
    serde_json::from_str(payload)
        .map_err(|e| ErrorKind::Unmarshal.error("Failed to decode cached response").with_context(e))
}

pub fn cached_to_get_user_by_id_response(payload: &str) -> AppResult<GetUserByIdResponse> {
    from_cached(payload)
}

pub fn cached_to_get_user_by_email_response(payload: &str) -> AppResult<GetUserByEmailResponse> {
    from_cached(payload)
}

pub fn cached_to_get_users_by_pagination_response(
    payload: &str,
) -> AppResult<GetUsersByPaginationResponse> {
    from_cached(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_core::Vote;

    fn create_request(first_name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: "jane@example.com".to_string(),
            user_name: "jane".to_string(),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            password: "plain-password".to_string(),
            role: "member".to_string(),
        }
    }

    fn user_with_votes(values: &[i32]) -> User {
        let mut user = create_request_to_user(&create_request("Jane")).unwrap();
        user.votes = values
            .iter()
            .map(|&vote| Vote {
                voted_id: UserId::new(),
                vote,
                voted_at: user.created_at,
            })
            .collect();
        user
    }

    #[test]
    fn test_create_request_copies_fields() {
        let user = create_request_to_user(&create_request("Jane")).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.user_name, "jane");
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.password, "plain-password");
        assert_eq!(user.role, "member");
        assert!(user.votes.is_empty());
    }

    #[test]
    fn test_create_request_assigns_fresh_ids() {
        let a = create_request_to_user(&create_request("Jane")).unwrap();
        let b = create_request_to_user(&create_request("Jane")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_request_requires_first_name() {
        let err = create_request_to_user(&create_request("")).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_update_request_parses_id() {
        let id = UserId::new();
        let update = update_request_to_user_update(&UpdateUserByIdRequest {
            id: id.to_string(),
            email: "new@example.com".to_string(),
            user_name: "new".to_string(),
            first_name: "New".to_string(),
            last_name: "Name".to_string(),
        })
        .unwrap();
        assert_eq!(update.id, id);
        assert_eq!(update.email, "new@example.com");
    }

    #[test]
    fn test_update_request_rejects_bad_id() {
        let err = update_request_to_user_update(&UpdateUserByIdRequest {
            id: "1".to_string(),
            ..UpdateUserByIdRequest::default()
        })
        .unwrap_err();
        assert!(err.is(ErrorKind::Conversion));
    }

    #[test]
    fn test_responses_carry_rating() {
        let user = user_with_votes(&[1, -1, 3]);

        let by_id = user_to_get_user_by_id_response(&user);
        assert_eq!(by_id.id, user.id.to_string());
        assert_eq!(by_id.rating, 3);

        let by_email = user_to_get_user_by_email_response(&user);
        assert_eq!(by_email.email, user.email);
        assert_eq!(by_email.rating, 3);
    }

    #[test]
    fn test_pagination_total_is_page_length() {
        let users = vec![user_with_votes(&[]), user_with_votes(&[2])];
        let response = users_to_get_users_by_pagination_response(&users, "3", "2");
        assert_eq!(response.total_users, 2);
        assert_eq!(response.page, "3");
        assert_eq!(response.per_page, "2");
        assert_eq!(response.users[1].rating, 2);
    }

    #[test]
    fn test_cached_response_round_trip() {
        let user = user_with_votes(&[5]);

        let by_id = user_to_get_user_by_id_response(&user);
        let restored = cached_to_get_user_by_id_response(&to_cached(&by_id).unwrap()).unwrap();
        assert_eq!(restored, by_id);

        let page = users_to_get_users_by_pagination_response(&[user], "1", "10");
        let restored =
            cached_to_get_users_by_pagination_response(&to_cached(&page).unwrap()).unwrap();
        assert_eq!(restored, page);
    }

    #[test]
    fn test_cached_payload_missing_fields_default() {
        let response = cached_to_get_user_by_email_response(r#"{"id":"x","email":"a@b.c"}"#).unwrap();
        assert_eq!(response.email, "a@b.c");
        assert_eq!(response.rating, 0);
    }

    #[test]
    fn test_malformed_cached_payload() {
        let err = cached_to_get_user_by_id_response("{not json").unwrap_err();
        assert!(err.is(ErrorKind::Unmarshal));
    }
}

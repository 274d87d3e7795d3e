//! Storage shapes for the `users` collection.

use bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};
use user_core::{User, UserId, Vote};
use uuid::Uuid;

/// A user as stored in MongoDB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    #[serde(rename = "user_email")]
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
    #[serde(default)]
    pub deleted_at: Option<BsonDateTime>,
    #[serde(default)]
    pub voted_at: Option<BsonDateTime>,
    /// Older records may hold `null` here.
    #[serde(default)]
    pub votes: Option<Vec<VoteDocument>>,
}

/// A vote embedded in a [`UserDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteDocument {
    pub voted_id: BsonUuid,
    pub vote: i32,
    pub voted_at: BsonDateTime,
}

pub(crate) fn to_bson_uuid(id: UserId) -> BsonUuid {
    BsonUuid::from_bytes(id.into_inner().into_bytes())
}

pub(crate) fn from_bson_uuid(id: BsonUuid) -> UserId {
    UserId::from_uuid(Uuid::from_bytes(id.bytes()))
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: to_bson_uuid(user.id),
            email: user.email.clone(),
            user_name: user.user_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: user.password.clone(),
            role: user.role.clone(),
            created_at: BsonDateTime::from_chrono(user.created_at),
            updated_at: BsonDateTime::from_chrono(user.updated_at),
            deleted_at: user.deleted_at.map(BsonDateTime::from_chrono),
            voted_at: user.voted_at.map(BsonDateTime::from_chrono),
            votes: Some(user.votes.iter().map(VoteDocument::from).collect()),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: from_bson_uuid(doc.id),
            email: doc.email,
            user_name: doc.user_name,
            first_name: doc.first_name,
            last_name: doc.last_name,
            password: doc.password,
            role: doc.role,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
            deleted_at: doc.deleted_at.map(BsonDateTime::to_chrono),
            voted_at: doc.voted_at.map(BsonDateTime::to_chrono),
            votes: doc
                .votes
                .unwrap_or_default()
                .into_iter()
                .map(Vote::from)
                .collect(),
        }
    }
}

impl From<&Vote> for VoteDocument {
    fn from(vote: &Vote) -> Self {
        Self {
            voted_id: to_bson_uuid(vote.voted_id),
            vote: vote.vote,
            voted_at: BsonDateTime::from_chrono(vote.voted_at),
        }
    }
}

impl From<VoteDocument> for Vote {
    fn from(doc: VoteDocument) -> Self {
        Self {
            voted_id: from_bson_uuid(doc.voted_id),
            vote: doc.vote,
            voted_at: doc.voted_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, Bson};
    use chrono::{TimeZone, Utc};

    fn create_user() -> User {
        let mut user = User::new(
            "jane@example.com".to_string(),
            "jane".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
            "$argon2id$hash".to_string(),
            "member".to_string(),
        );
        // Millisecond precision, as stored.
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        user.created_at = ts;
        user.updated_at = ts;
        user.votes = vec![Vote {
            voted_id: UserId::new(),
            vote: -1,
            voted_at: ts,
        }];
        user
    }

    #[test]
    fn test_document_field_names() {
        let document = bson::to_document(&UserDocument::from(&create_user())).unwrap();
        for key in [
            "_id",
            "user_email",
            "user_name",
            "first_name",
            "last_name",
            "password",
            "role",
            "created_at",
            "updated_at",
            "deleted_at",
            "voted_at",
            "votes",
        ] {
            assert!(document.contains_key(key), "missing {key}");
        }
        assert!(matches!(document.get("_id"), Some(Bson::Binary(_))));
    }

    #[test]
    fn test_entity_survives_storage_shape() {
        let user = create_user();
        let restored = User::from(UserDocument::from(&user));
        assert_eq!(restored, user);
        assert_eq!(restored.rating(), -1);
    }

    #[test]
    fn test_null_votes_decode_as_empty() {
        let id = BsonUuid::new();
        let now = BsonDateTime::now();
        let raw = doc! {
            "_id": id,
            "user_email": "a@b.c",
            "user_name": "a",
            "first_name": "A",
            "last_name": "B",
            "password": "x",
            "role": "",
            "created_at": now,
            "updated_at": now,
            "deleted_at": Bson::Null,
            "voted_at": Bson::Null,
            "votes": Bson::Null,
        };

        let decoded: UserDocument = bson::from_document(raw).unwrap();
        let user = User::from(decoded);
        assert!(user.votes.is_empty());
        assert_eq!(user.rating(), 0);
        assert_eq!(user.id, from_bson_uuid(id));
    }
}

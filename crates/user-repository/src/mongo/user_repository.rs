//! MongoDB user repository implementation.

use crate::document::to_bson_uuid;
use crate::{page_offset, traits::UserRepository, MongoConnection, UserDocument};
use async_trait::async_trait;
use bson::{doc, spec::BinarySubtype, Bson, DateTime as BsonDateTime};
use futures::TryStreamExt;
use mongodb::options::{FindOneOptions, FindOptions};
use mongodb::Collection;
use std::time::Duration;
use tracing::{debug, info};
use user_core::{AppResult, ErrorKind, User, UserId, UserUpdate};
use uuid::Uuid;

/// MongoDB user repository implementation.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
    query_timeout: Duration,
}

impl MongoUserRepository {
    /// Creates a repository over `collection`; reads are capped at `query_timeout`.
    #[must_use]
    pub fn new(collection: Collection<UserDocument>, query_timeout: Duration) -> Self {
        Self {
            collection,
            query_timeout,
        }
    }

    /// Creates a repository over the connection's users collection.
    #[must_use]
    pub fn from_connection(connection: &MongoConnection) -> Self {
        Self::new(connection.users(), connection.query_timeout())
    }

    fn find_one_options(&self) -> FindOneOptions {
        FindOneOptions::builder().max_time(self.query_timeout).build()
    }
}

/// Skip and limit for a page, or `None` when the page is empty by definition.
///
/// A zero limit means "no limit" to the server, so `per_page == 0` never
/// reaches a query.
fn page_window(page: i64, per_page: i64) -> AppResult<Option<(u64, i64)>> {
    let offset = page_offset(page, per_page);
    if offset < 0 || per_page < 0 {
        return Err(ErrorKind::StoreRead
            .error("Failed GetUsersByPageAndPerPage")
            .with_context(format!("invalid window page={page} per_page={per_page}")));
    }
    if per_page == 0 {
        return Ok(None);
    }
    Ok(Some((offset.unsigned_abs(), per_page)))
}

fn inserted_uuid(id: &Bson) -> Option<Uuid> {
    match id {
        Bson::Binary(binary) if binary.subtype == BinarySubtype::Uuid => {
            Uuid::from_slice(&binary.bytes).ok()
        }
        _ => None,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create_user(&self, user: &User) -> AppResult<String> {
        debug!("Creating user: {}", user.id);

        let result = self
            .collection
            .insert_one(UserDocument::from(user), None)
            .await
            .map_err(|e| ErrorKind::StoreWrite.error("Failed CreateUser").with_context(e))?;

        let id = inserted_uuid(&result.inserted_id).ok_or_else(|| {
            ErrorKind::StoreWrite
                .error("Failed CreateUser")
                .with_context(format!("unexpected inserted id {}", result.inserted_id))
        })?;

        info!("User created: {}", id);
        Ok(id.to_string())
    }

    async fn get_users_by_page_and_per_page(&self, page: i64, per_page: i64) -> AppResult<Vec<User>> {
        debug!("Finding users page {} per page {}", page, per_page);

        let Some((skip, limit)) = page_window(page, per_page)? else {
            return Ok(Vec::new());
        };

        let options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .skip(skip)
            .limit(limit)
            .max_time(self.query_timeout)
            .build();

        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| ErrorKind::StoreRead.error("Failed GetUsersByPageAndPerPage").with_context(e))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| ErrorKind::StoreRead.error("Failed decodeUsers").with_context(e))?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, id: UserId) -> AppResult<User> {
        debug!("Finding user by id: {}", id);

        let document = self
            .collection
            .find_one(doc! { "_id": to_bson_uuid(id) }, self.find_one_options())
            .await
            .map_err(|e| ErrorKind::StoreRead.error("Failed GetUserByID").with_context(e))?
            .ok_or_else(|| {
                ErrorKind::NotFound
                    .error("Failed GetUserByID")
                    .with_context(format!("no user with id {id}"))
            })?;

        Ok(User::from(document))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        debug!("Finding user by email: {}", email);

        let document = self
            .collection
            .find_one(doc! { "user_email": email }, self.find_one_options())
            .await
            .map_err(|e| ErrorKind::StoreRead.error("Failed GetUserByEmail").with_context(e))?
            .ok_or_else(|| {
                ErrorKind::StoreRead
                    .error("Failed GetUserByEmail")
                    .with_context(format!("no user with email {email}"))
            })?;

        Ok(User::from(document))
    }

    async fn update_user_by_id(&self, update: &UserUpdate) -> AppResult<String> {
        debug!("Updating user: {}", update.id);

        let result = self
            .collection
            .update_one(
                doc! { "_id": to_bson_uuid(update.id) },
                doc! {
                    "$set": {
                        "user_email": update.email.clone(),
                        "first_name": update.first_name.clone(),
                        "user_name": update.user_name.clone(),
                        "last_name": update.last_name.clone(),
                        "updated_at": BsonDateTime::from_chrono(update.updated_at),
                    }
                },
                None,
            )
            .await
            .map_err(|e| ErrorKind::StoreWrite.error("Failed UpdateUserByID").with_context(e))?;

        if result.matched_count != 1 {
            return Err(ErrorKind::StoreWrite
                .error("Failed UpdateUserByID")
                .with_context(format!("not found {}", update.id)));
        }
        if result.modified_count != 1 {
            return Err(ErrorKind::StoreWrite
                .error("Failed UpdateUserByID")
                .with_context(format!("nothing is modified {}", update.id)));
        }

        info!("User updated: {}", update.id);
        Ok(update.email.clone())
    }

    async fn drop_user_by_id(&self, id: UserId) -> AppResult<()> {
        debug!("Deleting user: {}", id);

        let result = self
            .collection
            .delete_one(doc! { "_id": to_bson_uuid(id) }, None)
            .await
            .map_err(|e| ErrorKind::StoreWrite.error("Failed DropUserByID").with_context(e))?;

        if result.deleted_count != 1 {
            return Err(ErrorKind::StoreWrite
                .error("Failed DropUserByID")
                .with_context(format!("nothing was deleted {id}")));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

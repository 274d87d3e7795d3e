//! MongoDB implementation of the repository port.

mod user_repository;

pub use user_repository::MongoUserRepository;

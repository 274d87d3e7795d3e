//! # User Repository
//!
//! Persistence for users:
//!
//! ```text
//! Interactor
//!   ↓  Arc<dyn UserRepository>   (port)
//! MongoUserRepository            (adapter)
//!   ↓  Collection<UserDocument>
//! MongoDB
//! ```

pub mod connection;
pub mod document;
pub mod mongo;
pub mod traits;

pub use connection::*;
pub use document::{UserDocument, VoteDocument};
pub use mongo::*;
pub use traits::*;

//! gRPC clients for talking to a running user service.

mod user_client;

pub use user_client::*;

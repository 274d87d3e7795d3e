//! # User gRPC
//!
//! gRPC transport for the user service using Tonic: the service adapter
//! over the interactor, the server, and a typed remote client.

mod convert;
pub mod clients;
pub mod proto;
pub mod server;
pub mod services;

pub use clients::*;
pub use server::*;
pub use services::*;

//! Generated protobuf types and service stubs.

#![allow(clippy::all, clippy::pedantic)]

tonic::include_proto!("service_user");

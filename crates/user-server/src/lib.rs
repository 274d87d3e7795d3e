//! # User Server Library
//!
//! Composition root for the user service: the [`registry::Registry`] that
//! wires the dependency graph, and startup helpers shared by the binaries.

pub mod registry;
pub mod startup;

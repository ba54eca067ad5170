//! Try-on Core - Shared types library.
//!
//! This crate provides the common types used across the try-on submission
//! components:
//! - `client` - The upload client posting submissions to the hosting API
//! - `integration-tests` - Mock-server tests for the client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Image file handles and the submission payload

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

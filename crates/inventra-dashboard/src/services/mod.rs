//! Typed service functions, one thin async mapping per backend operation.
//!
//! Every function takes the shared [`crate::api::Api`] client and surfaces
//! the underlying [`crate::api::ApiError`] unchanged; no domain-specific
//! error types are introduced at this layer.

pub mod admin;
pub mod asset;
pub mod auth;
pub mod user;

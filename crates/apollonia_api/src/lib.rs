//! HTTP-contract boundary for the Apollonia staff directory.
//!
//! # Responsibility
//! - Route `(method, path, body)` triples to one core store operation.
//! - Render core results and errors as stable status + JSON envelopes.
//!
//! # Invariants
//! - Dispatch never panics; every outcome is an [`api::ApiResponse`].
//! - Core error semantics map 1:1 onto status codes (validation -> 400,
//!   not-found -> 404).

pub mod api;

pub use api::{ApiResponse, DirectoryApi};

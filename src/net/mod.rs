//! Networking modules for the school REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam (browser `fetch` via `gloo-net` in hydrate
//! builds, fakes in tests), `api` maps each backend endpoint onto typed calls,
//! and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;

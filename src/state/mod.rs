//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `badge`) so components depend on
//! small focused models, provided as `RwSignal`s through Leptos context.

pub mod badge;
pub mod session;

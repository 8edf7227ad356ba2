//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route-guard and navigation decisions out of page
//! components so they stay testable without a browser.

pub mod auth;
pub mod nav;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing and presentation rules out of the page
//! components so they can be tested without a browser.

pub mod auth;
pub mod profile;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational; pages own the session reads and
//! redirects and pass resolved values down.

pub mod loading_indicator;
pub mod security_badge;

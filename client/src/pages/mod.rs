//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its session redirect and delegates rendering details to
//! `components`.

pub mod dashboard;
pub mod landing;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only shared state is the auth session; it lives in its own module so
//! route guards and profile rendering depend on one small model.

pub mod session;

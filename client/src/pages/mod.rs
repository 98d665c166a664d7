//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `layout` is the shell every route renders inside. Each page owns its own
//! route-scoped view state and delegates rendering details to `components`.

pub mod blog;
pub mod contact;
pub mod home;
pub mod layout;
pub mod not_found;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Every helper compiles to a no-op outside the `hydrate` build so
//! server rendering stays deterministic.

#[cfg(feature = "hydrate")]
pub mod observer;
pub mod scroll;

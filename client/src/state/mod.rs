//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each machine is a plain value type with pure transition methods. The
//! owning component wraps exactly one instance in an `RwSignal`, so the
//! invariants hold (and are tested) without a browser or reactive runtime.

pub mod accordion;
pub mod drawer;
pub mod modal;
pub mod reveal;
pub mod route;

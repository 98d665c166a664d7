//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the interactive pieces of each page.
//! They own no state of their own beyond presentation details; the page or
//! layout that mounts them passes in signals and callbacks.

pub mod accordion;
pub mod footer;
pub mod mobile_drawer;
pub mod nav_bar;
pub mod post_card;
pub mod post_modal;
pub mod reveal;
pub mod scroll_reset;

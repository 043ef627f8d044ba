//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (page lookup, wall
//! clock) from view logic to improve reuse and testability.

pub mod clock;
pub mod page;

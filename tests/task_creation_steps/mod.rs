//! Step definitions for task creation behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

//! State Management
//!
//! Global signals and the browser-backed view controller.

pub mod global;

pub use global::{provide_global_state, use_controller, use_global_state};

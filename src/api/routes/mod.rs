//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dictionaries;
pub mod health;
pub mod settings;
pub mod translate;

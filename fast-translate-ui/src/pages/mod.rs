//! Pages
//!
//! Top-level page components for each route.

pub mod dictionaries;
pub mod settings;
pub mod translate;

pub use dictionaries::Dictionaries;
pub use settings::Settings;
pub use translate::Translate;

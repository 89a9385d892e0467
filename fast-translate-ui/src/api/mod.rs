//! API Layer

pub mod client;

pub use client::{get_api_base, ping, set_api_base, HttpBackend};

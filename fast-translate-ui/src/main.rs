//! Fast Translate UI
//!
//! English to Bengali translation front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Translation with live "fire mode" (debounced as you type)
//! - Highlighted output and the dictionary entries that produced it
//! - Management of the four replacement dictionaries
//! - Gemini API key, model and general prompt settings
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to
//! WebAssembly. Behaviour lives in [`controller::ViewController`], which
//! is independent of the browser; `state` wires it to signals, gloo
//! timers and the HTTP client.

use leptos::*;

mod api;
mod app;
mod components;
mod controller;
mod model;
mod pages;
mod render;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

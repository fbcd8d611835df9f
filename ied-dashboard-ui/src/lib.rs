//! Dioxus components and D3.js bridge for the education dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `route`: the router route carrying the raw location path to `Page::resolve`
//! - `components`: RSX components (sidebar, toggle button, chart pages, etc.)

pub mod components;
pub mod js_bridge;
pub mod route;
pub mod state;

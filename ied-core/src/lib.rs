//! Core types for the Iranian education dashboard.
//!
//! Everything here is plain Rust with no UI dependencies, so the routing and
//! sidebar logic can be tested natively and reused by both the WASM dashboard
//! and the CLI.
//!
//! - `level`: education levels, genders and the dataset column names
//! - `enrollment`: the per-year enrollment record and its CSV parser
//! - `page`: path to page resolution and chart specifications
//! - `sidebar`: the two-state sidebar visibility flag
//! - `style`: immutable layout styles selected by the sidebar flag

pub mod enrollment;
pub mod level;
pub mod page;
pub mod sidebar;
pub mod style;

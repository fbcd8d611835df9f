//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Girls and boys enrolled at one education level in one year.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LevelCount {
    pub year: i32,
    pub girls: u64,
    pub boys: u64,
}

impl LevelCount {
    /// Girls plus boys, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.girls.saturating_add(self.boys)
    }
}

/// First and last year present in the table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

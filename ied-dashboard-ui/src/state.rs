//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ied_core::sidebar::SidebarVisibility;
use ied_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Enrollment database (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Fatal error, set when the dataset cannot be loaded
    pub error_msg: Signal<Option<String>>,
    /// Cumulative clicks on the sidebar toggle button
    pub toggle_clicks: Signal<u32>,
    /// Stored sidebar state, absent until the first toggle event
    pub sidebar: Signal<Option<SidebarVisibility>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            toggle_clicks: Signal::new(0),
            sidebar: Signal::new(None),
        }
    }

    /// Current sidebar state; an absent stored value means shown.
    pub fn visibility(&self) -> SidebarVisibility {
        (self.sidebar)().unwrap_or_default()
    }

    /// Register one click on the toggle button and store the new state.
    pub fn click_toggle(&mut self) -> SidebarVisibility {
        let clicks = (self.toggle_clicks)().saturating_add(1);
        let next = SidebarVisibility::toggle(Some(clicks), (self.sidebar)());
        self.toggle_clicks.set(clicks);
        self.sidebar.set(Some(next));
        log::debug!("[IED] sidebar: click {} -> {}", clicks, next);
        next
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

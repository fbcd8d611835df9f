//! RSX components for the education dashboard.

mod chart_container;
mod chart_header;
mod chart_page;
mod dashboard_page;
mod error_display;
mod loading_spinner;
mod not_found;
mod sidebar;
mod toggle_button;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_page::ChartPage;
pub use dashboard_page::DashboardPage;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use not_found::NotFoundView;
pub use sidebar::Sidebar;
pub use toggle_button::ToggleButton;

//! The whole dashboard layout for one routed path.

use crate::components::{ChartPage, LoadingSpinner, NotFoundView, Sidebar, ToggleButton};
use crate::state::AppState;
use dioxus::prelude::*;
use ied_core::page::{Page, PageView};
use ied_core::style::LayoutTheme;

/// Sidebar, toggle button and content area.
///
/// `path` is the location path as the browser reports it and is resolved
/// with [`Page::resolve`]; styles come from the [`LayoutTheme`] in context,
/// selected by the stored sidebar state.
#[component]
pub fn DashboardPage(path: String) -> Element {
    let state = use_context::<AppState>();
    let theme = use_context::<LayoutTheme>();

    let page = Page::resolve(&path);
    let styles = theme.styles_for(state.visibility());
    let sidebar_style = styles.sidebar.to_css();
    let button_style = styles.button.to_css();
    let content_style = styles.content.to_css();

    // The dataset loads in an effect after the first render.
    let body = if *state.loading.read() {
        rsx! { LoadingSpinner {} }
    } else {
        match page.view() {
            PageView::Chart(spec) => rsx! {
                ChartPage { key: "{spec.title}", spec: spec.clone() }
            },
            PageView::NotFound { heading, message } => rsx! {
                NotFoundView { heading, message }
            },
        }
    };

    rsx! {
        div {
            Sidebar { current_path: path.clone(), style: sidebar_style }
            ToggleButton { style: button_style }
            div {
                id: "page-content",
                style: "{content_style}",
                {body}
            }
        }
    }
}

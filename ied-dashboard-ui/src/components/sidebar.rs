//! Collapsible navigation sidebar.

use crate::route::Route;
use dioxus::prelude::*;
use ied_core::page::Page;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Path currently shown; the link with exactly this path is highlighted
    pub current_path: String,
    /// Inline style for the current sidebar state
    pub style: String,
}

/// Sidebar with the dashboard title and one link per chart page.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let links: Vec<(Route, &'static str, &'static str)> = Page::NAV
        .iter()
        .filter_map(|page| {
            let label = page.nav_label()?;
            let class = if page.is_active(&props.current_path) {
                "nav-link active"
            } else {
                "nav-link"
            };
            Some((Route::for_page(page), label, class))
        })
        .collect();

    rsx! {
        div {
            id: "sidebar",
            style: "{props.style}",
            h2 { class: "display-4", "Moodle Analytics" }
            hr {}
            p { "Iranian Education Dataset" }
            nav {
                class: "nav nav-pills flex-column",
                for (route, label, class) in links {
                    Link {
                        to: route,
                        class: class.to_string(),
                        "{label}"
                    }
                }
            }
            hr {}
        }
    }
}

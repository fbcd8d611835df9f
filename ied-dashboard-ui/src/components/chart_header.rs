//! Chart header component with a centred title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What the bars measure (e.g., "Students enrolled per year")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for chart pages.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                style: "text-align: center;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #aaa;",
                    "{props.subtitle}"
                }
            }
        }
    }
}

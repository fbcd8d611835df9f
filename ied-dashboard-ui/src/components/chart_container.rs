//! Mount point for a D3 chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into
    pub id: String,
    /// Accessible name of the chart
    pub title: String,
}

/// Empty dark surface that the grouped bar script fills in.
///
/// The element is cleared on unmount by `js_bridge::destroy_chart`.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            role: "img",
            aria_label: "{props.title}",
            style: "width: 100%; min-height: 450px; background-color: #161a28;",
        }
    }
}

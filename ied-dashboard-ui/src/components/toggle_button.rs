//! Sidebar show/hide button.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ToggleButtonProps {
    /// Inline style for the current sidebar state
    pub style: String,
}

/// Button that flips the sidebar between shown and hidden.
#[component]
pub fn ToggleButton(props: ToggleButtonProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: Event<MouseData>| {
        state.click_toggle();
    };

    rsx! {
        div {
            id: "button",
            style: "{props.style}",
            button {
                id: "show_hide",
                r#type: "button",
                class: "btn btn-outline-light",
                onclick: on_click,
                "☰"
            }
        }
    }
}

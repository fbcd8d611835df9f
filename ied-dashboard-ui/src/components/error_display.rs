//! Error panel for the content area.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Short heading, e.g. "Dataset unavailable"
    pub title: String,
    pub message: String,
}

/// Dark-theme panel with a red accent, used when the dataset cannot be
/// loaded or a chart cannot be drawn.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "p-4 mb-4 rounded-3",
            style: "background-color: #1f2436; border-left: 4px solid #EF553B; color: #e6e6e6;",
            h4 {
                style: "color: #EF553B; margin-bottom: 0.5rem;",
                "{props.title}"
            }
            p { class: "mb-0", "{props.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_carry_title_and_message() {
        let props = ErrorDisplayProps {
            title: "Dataset unavailable".to_string(),
            message: "no enrollment dataset".to_string(),
        };
        assert!(props.clone() == props);
        assert_eq!(props.title, "Dataset unavailable");
    }
}

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NotFoundViewProps {
    pub heading: String,
    pub message: String,
}

/// Shown in the content area for any path that is not a chart page.
#[component]
pub fn NotFoundView(props: NotFoundViewProps) -> Element {
    rsx! {
        div {
            class: "p-5 mb-4 rounded-3",
            style: "background-color: #1f2436;",
            h1 { "{props.heading}" }
            hr {}
            p { "{props.message}" }
        }
    }
}

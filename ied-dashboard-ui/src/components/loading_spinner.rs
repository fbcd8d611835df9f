use dioxus::prelude::*;

/// Bootstrap spinner shown in the content area until the dataset is loaded.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading enrollment data".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "d-flex align-items-center gap-3 p-5",
            div {
                class: "spinner-border text-light",
                role: "status",
                span { class: "visually-hidden", "{label}" }
            }
            span { style: "color: #e6e6e6;", "{label}…" }
        }
    }
}

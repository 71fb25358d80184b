use dioxus::prelude::*;

#[component]
pub fn Header(endpoint: String) -> Element {
    rsx! {
        header {
            class: "chat-header",

            // Left side - Title
            h1 {
                class: "chat-title",
                "Chat"
            }

            // Right side - Server the prompts go to
            span {
                class: "endpoint-badge",
                title: "Inference server",
                "{endpoint}"
            }
        }
    }
}

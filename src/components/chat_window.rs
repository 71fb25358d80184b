use super::MessageView;
use crate::utils::Conversation;
use dioxus::prelude::*;

#[component]
pub fn ChatWindow(conversation: Signal<Conversation>) -> Element {
    let is_empty = conversation.read().messages().is_empty();

    rsx! {
        div {
            id: "chat-window",
            class: "chat-window",

            if is_empty {
                div {
                    class: "empty-state",
                    p { "Send some text, an image or an audio clip to start." }
                }
            } else {
                for message in conversation.read().messages().iter() {
                    MessageView {
                        key: "{message.time}",
                        message: message.clone(),
                    }
                }
            }
        }
    }
}

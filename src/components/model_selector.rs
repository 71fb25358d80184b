use crate::utils::{Conversation, MessageKind, SupportedModel};
use dioxus::prelude::*;

#[component]
pub fn ModelSelector(conversation: Signal<Conversation>) -> Element {
    let mut conversation = conversation;
    let current = conversation.read().model();

    rsx! {
        div {
            class: "selector-row",
            span { class: "selector-label", "Model" }

            for model in SupportedModel::all() {
                label {
                    key: "{model.id()}",
                    class: "radio",
                    input {
                        r#type: "radio",
                        name: "model",
                        value: model.id(),
                        checked: current == model,
                        onchange: move |_| conversation.write().select_model(model),
                    }
                    "{model.id()}"
                }
            }
        }
    }
}

/// Which representation to ask the server for on the next prompt.
#[component]
pub fn ReplyKindSelector(conversation: Signal<Conversation>) -> Element {
    let mut conversation = conversation;
    let current = conversation.read().reply_kind();

    rsx! {
        div {
            class: "selector-row",
            span { class: "selector-label", "Reply as" }

            for kind in MessageKind::all() {
                label {
                    key: "{kind.name()}",
                    class: "radio",
                    input {
                        r#type: "radio",
                        name: "reply-kind",
                        value: kind.name(),
                        checked: current == kind,
                        onchange: move |_| conversation.write().select_reply_kind(kind),
                    }
                    "{kind.name()}"
                }
            }
        }
    }
}

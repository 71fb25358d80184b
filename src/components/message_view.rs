use crate::utils::{MediaRef, Message, MessageContent, MessageSource};
use dioxus::prelude::*;

/// What goes inside a message bubble.
#[derive(Clone, PartialEq, Debug)]
pub enum MessageBody {
    PlainText(String),
    ImageIcon { file_name: String },
    AudioIcon { file_name: String },
    Image { src: String },
    Audio { src: String },
}

pub fn message_body(message: &Message) -> MessageBody {
    match &message.content {
        MessageContent::Text(text) => MessageBody::PlainText(text.clone()),
        MessageContent::Image(MediaRef::Local(file)) => MessageBody::ImageIcon {
            file_name: file.name.clone(),
        },
        MessageContent::Audio(MediaRef::Local(file)) => MessageBody::AudioIcon {
            file_name: file.name.clone(),
        },
        MessageContent::Image(MediaRef::Remote(reply)) => match reply.trim() {
            "" => MessageBody::PlainText("(empty image reply)".to_string()),
            src => MessageBody::Image {
                src: src.to_string(),
            },
        },
        MessageContent::Audio(MediaRef::Remote(reply)) => match reply.trim() {
            "" => MessageBody::PlainText("(empty audio reply)".to_string()),
            src => MessageBody::Audio {
                src: src.to_string(),
            },
        },
    }
}

/// Row alignment and bubble colour for a message source.
pub fn bubble_classes(source: MessageSource) -> (&'static str, &'static str) {
    match source {
        MessageSource::Local => ("message-row local", "bubble bubble-local"),
        MessageSource::Remote => ("message-row remote", "bubble bubble-remote"),
    }
}

#[component]
pub fn MessageView(message: Message) -> Element {
    let (row_class, bubble_class) = bubble_classes(message.source);

    rsx! {
        div {
            class: "{row_class}",
            div {
                class: "{bubble_class}",
                match message_body(&message) {
                    MessageBody::PlainText(text) => rsx! {
                        p { class: "bubble-text", "{text}" }
                    },
                    MessageBody::ImageIcon { file_name } => rsx! {
                        div {
                            class: "media-placeholder",
                            title: "{file_name}",
                            span { class: "icon", "🖼" }
                            span { class: "file-name", "{file_name}" }
                        }
                    },
                    MessageBody::AudioIcon { file_name } => rsx! {
                        div {
                            class: "media-placeholder",
                            title: "{file_name}",
                            span { class: "icon", "🎤" }
                            span { class: "file-name", "{file_name}" }
                        }
                    },
                    MessageBody::Image { src } => rsx! {
                        img { class: "reply-image", src: "{src}", alt: "Image reply" }
                    },
                    MessageBody::Audio { src } => rsx! {
                        audio { class: "reply-audio", src: "{src}", controls: true }
                    },
                }
            }
        }
    }
}

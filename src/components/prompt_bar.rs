use crate::utils::{Conversation, DispatchJob, MessageKind, PickedFile};
use dioxus::prelude::*;
use tracing::warn;

fn picker_id(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Image => "image-prompt",
        MessageKind::Audio => "audio-prompt",
        MessageKind::Text => "text-prompt",
    }
}

/// Resets a file input so choosing the same file again still fires `onchange`.
fn clear_picker_script(kind: MessageKind) -> String {
    format!(
        "document.getElementById('{}').value = '';",
        picker_id(kind)
    )
}

/// First file of a picker change event, read into memory. `None` when nothing was chosen.
async fn read_picked_file(evt: FormEvent) -> Option<PickedFile> {
    let file = evt.files().into_iter().next()?;

    match file.read_bytes().await {
        Ok(bytes) => Some(PickedFile::new(
            file.name(),
            file.content_type(),
            bytes.to_vec(),
        )),
        Err(e) => {
            warn!(file = %file.name(), error = %e, "Failed to read picked file");
            None
        }
    }
}

#[component]
pub fn PromptBar(conversation: Signal<Conversation>, on_dispatch: EventHandler<DispatchJob>) -> Element {
    let mut conversation = conversation;

    let mut submit = move || {
        let job = conversation.write().submit_draft();
        if let Some(job) = job {
            on_dispatch.call(job);
        }
    };

    let pick = move |kind: MessageKind, evt: FormEvent| async move {
        let mut conversation = conversation;
        let file = read_picked_file(evt).await;
        let _ = document::eval(&clear_picker_script(kind));
        let job = conversation.write().pick_file(kind, file);
        if let Some(job) = job {
            on_dispatch.call(job);
        }
    };

    let draft = conversation.read().draft().to_string();
    let has_content = !draft.is_empty();

    rsx! {
        div {
            class: "prompt-bar",

            input {
                id: picker_id(MessageKind::Image),
                class: "hidden",
                r#type: "file",
                accept: "image/*",
                onchange: move |evt| pick(MessageKind::Image, evt),
            }
            input {
                id: picker_id(MessageKind::Audio),
                class: "hidden",
                r#type: "file",
                accept: "audio/*",
                onchange: move |evt| pick(MessageKind::Audio, evt),
            }

            input {
                class: "prompt-input",
                r#type: "text",
                placeholder: "Type a prompt...",
                value: "{draft}",
                oninput: move |evt| conversation.write().set_draft(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        submit();
                    }
                },
                autofocus: true,
            }

            div {
                class: "prompt-actions",
                label {
                    r#for: picker_id(MessageKind::Image),
                    class: "icon-button",
                    title: "Send an image",
                    "🖼"
                }
                label {
                    r#for: picker_id(MessageKind::Audio),
                    class: "icon-button",
                    title: "Send an audio clip",
                    "🎤"
                }
                button {
                    class: "send-button",
                    title: "Send",
                    disabled: !has_content,
                    onclick: move |_| submit(),
                    "➤"
                }
            }
        }
    }
}

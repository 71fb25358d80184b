use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a message payload is interpreted and rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Audio,
}

impl MessageKind {
    pub fn all() -> Vec<MessageKind> {
        vec![MessageKind::Text, MessageKind::Image, MessageKind::Audio]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Text => "Text",
            MessageKind::Image => "Image",
            MessageKind::Audio => "Audio",
        }
    }

    /// Media type sent in the `Accept` header when this kind is the desired reply.
    pub fn accept(&self) -> &'static str {
        match self {
            MessageKind::Text => "text/plain",
            MessageKind::Image => "image/png",
            MessageKind::Audio => "audio/wav",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageSource {
    Local,
    Remote,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SupportedModel {
    #[default]
    #[serde(rename = "open_clip")]
    OpenClip,
    #[serde(rename = "whisper")]
    Whisper,
    #[serde(rename = "gpt4all")]
    Gpt4All,
}

impl SupportedModel {
    pub fn all() -> Vec<SupportedModel> {
        vec![
            SupportedModel::OpenClip,
            SupportedModel::Whisper,
            SupportedModel::Gpt4All,
        ]
    }

    /// Identifier sent in the `model` form field.
    pub fn id(&self) -> &'static str {
        match self {
            SupportedModel::OpenClip => "open_clip",
            SupportedModel::Whisper => "whisper",
            SupportedModel::Gpt4All => "gpt4all",
        }
    }
}

/// A file chosen through one of the pickers.
#[derive(Clone, PartialEq, Debug)]
pub struct PickedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Media payload: a file the user picked, or whatever reference the server replied with.
#[derive(Clone, PartialEq, Debug)]
pub enum MediaRef {
    Local(PickedFile),
    Remote(String),
}

#[derive(Clone, PartialEq, Debug)]
pub enum MessageContent {
    Text(String),
    Image(MediaRef),
    Audio(MediaRef),
}

impl MessageContent {
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageContent::Text(_) => MessageKind::Text,
            MessageContent::Image(_) => MessageKind::Image,
            MessageContent::Audio(_) => MessageKind::Audio,
        }
    }

    /// Wrap a server reply body as content of the declared kind.
    pub fn from_reply(kind: MessageKind, body: String) -> Self {
        match kind {
            MessageKind::Text => MessageContent::Text(body),
            MessageKind::Image => MessageContent::Image(MediaRef::Remote(body)),
            MessageKind::Audio => MessageContent::Audio(MediaRef::Remote(body)),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    pub content: MessageContent,
    pub source: MessageSource,
    /// Milliseconds since the epoch, strictly increasing within a conversation.
    pub time: u64,
}

impl Message {
    pub fn is_local(&self) -> bool {
        self.source == MessageSource::Local
    }

    /// The outbound prompt for a locally authored message.
    pub fn prompt(&self) -> Option<Prompt> {
        if !self.is_local() {
            return None;
        }
        match &self.content {
            MessageContent::Text(text) => Some(Prompt::Text(text.clone())),
            MessageContent::Image(MediaRef::Local(file)) => Some(Prompt::Image(file.clone())),
            MessageContent::Audio(MediaRef::Local(file)) => Some(Prompt::Audio(file.clone())),
            _ => None,
        }
    }
}

/// Payload of a single dispatch. The variant is the input type.
#[derive(Clone, PartialEq, Debug)]
pub enum Prompt {
    Text(String),
    Image(PickedFile),
    Audio(PickedFile),
}

impl Prompt {
    pub fn kind(&self) -> MessageKind {
        match self {
            Prompt::Text(_) => MessageKind::Text,
            Prompt::Image(_) => MessageKind::Image,
            Prompt::Audio(_) => MessageKind::Audio,
        }
    }

    pub fn byte_len(&self) -> usize {
        match self {
            Prompt::Text(text) => text.len(),
            Prompt::Image(file) | Prompt::Audio(file) => file.byte_len(),
        }
    }
}

/// Successful reply: the raw body tagged with the kind that was requested.
#[derive(Clone, PartialEq, Debug)]
pub struct Reply {
    pub body: String,
    pub kind: MessageKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_per_kind() {
        assert_eq!(MessageKind::Text.accept(), "text/plain");
        assert_eq!(MessageKind::Image.accept(), "image/png");
        assert_eq!(MessageKind::Audio.accept(), "audio/wav");
        assert_ne!(MessageKind::Audio.accept(), "image/wav");
    }

    #[test]
    fn test_prompt_byte_len() {
        let file = PickedFile::new("clip.wav", None, vec![0; 5]);
        assert_eq!(Prompt::Audio(file).byte_len(), 5);
        assert_eq!(Prompt::Text("héllo".into()).byte_len(), 6);
    }

    #[test]
    fn test_model_ids() {
        let ids: Vec<_> = SupportedModel::all().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["open_clip", "whisper", "gpt4all"]);
        assert_eq!(SupportedModel::default(), SupportedModel::OpenClip);
    }

    #[test]
    fn test_reply_content_kind() {
        let content = MessageContent::from_reply(MessageKind::Image, "http://x/cat.png".into());
        assert_eq!(content.kind(), MessageKind::Image);
        assert_eq!(
            content,
            MessageContent::Image(MediaRef::Remote("http://x/cat.png".into()))
        );
    }

    #[test]
    fn test_prompt_only_for_local_messages() {
        let file = PickedFile::new("cat.png", Some("image/png".into()), vec![1, 2, 3]);
        let local = Message {
            content: MessageContent::Image(MediaRef::Local(file.clone())),
            source: MessageSource::Local,
            time: 1,
        };
        assert_eq!(local.prompt(), Some(Prompt::Image(file)));

        let remote = Message {
            content: MessageContent::Text("hi".into()),
            source: MessageSource::Remote,
            time: 2,
        };
        assert_eq!(remote.prompt(), None);
    }
}

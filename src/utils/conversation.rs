use crate::utils::{
    DispatchError, MediaRef, Message, MessageContent, MessageKind, MessageSource, PickedFile,
    Prompt, Reply, SupportedModel,
};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Placeholder appended when a dispatch fails, whatever the cause.
pub const ERROR_REPLY: &str = "Error loading reply";

/// One prompt exchange to run, captured when the local message was appended.
#[derive(Clone, PartialEq, Debug)]
pub struct DispatchJob {
    /// Timestamp of the local message this job answers.
    pub origin: u64,
    pub model: SupportedModel,
    pub prompt: Prompt,
    pub output: MessageKind,
}

/// Session state for the chat page: the message list, the draft and the current selections.
///
/// The list is append-only; timestamps come from a clock that never repeats or goes
/// backwards, so list order and time order always agree.
#[derive(Clone, PartialEq, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    draft: String,
    model: SupportedModel,
    reply_kind: MessageKind,
    last_time: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(SupportedModel::default(), MessageKind::Text)
    }
}

impl Conversation {
    pub fn new(model: SupportedModel, reply_kind: MessageKind) -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            model,
            reply_kind,
            last_time: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn model(&self) -> SupportedModel {
        self.model
    }

    pub fn select_model(&mut self, model: SupportedModel) {
        debug!(model = model.id(), "Model selected");
        self.model = model;
    }

    pub fn reply_kind(&self) -> MessageKind {
        self.reply_kind
    }

    pub fn select_reply_kind(&mut self, kind: MessageKind) {
        debug!(reply = kind.name(), "Reply kind selected");
        self.reply_kind = kind;
    }

    /// Move the draft into a local text message. Does nothing while the draft is empty.
    pub fn submit_draft(&mut self) -> Option<DispatchJob> {
        if self.draft.is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let message = self.append(MessageContent::Text(text), MessageSource::Local);
        let origin = message.time;
        let prompt = message.prompt()?;
        Some(self.job(origin, prompt))
    }

    /// Append a picked image or audio file. `None` means the picker was cancelled.
    pub fn pick_file(&mut self, kind: MessageKind, file: Option<PickedFile>) -> Option<DispatchJob> {
        let Some(file) = file else {
            debug!(kind = kind.name(), "File picker cancelled");
            return None;
        };

        let content = match kind {
            MessageKind::Image => MessageContent::Image(MediaRef::Local(file)),
            MessageKind::Audio => MessageContent::Audio(MediaRef::Local(file)),
            MessageKind::Text => return None,
        };

        let message = self.append(content, MessageSource::Local);
        let origin = message.time;
        let prompt = message.prompt()?;
        Some(self.job(origin, prompt))
    }

    /// Append the outcome of a dispatch as a remote message.
    pub fn record_reply(&mut self, result: Result<Reply, DispatchError>) -> &Message {
        let content = match result {
            Ok(reply) => MessageContent::from_reply(reply.kind, reply.body),
            Err(e) => MessageContent::Text(e.user_message().to_string()),
        };
        debug!(kind = content.kind().name(), "Recording reply");
        self.append(content, MessageSource::Remote)
    }

    fn job(&self, origin: u64, prompt: Prompt) -> DispatchJob {
        DispatchJob {
            origin,
            model: self.model,
            prompt,
            output: self.reply_kind,
        }
    }

    fn append(&mut self, content: MessageContent, source: MessageSource) -> &Message {
        let time = self.next_time();
        self.messages.push(Message {
            content,
            source,
            time,
        });
        &self.messages[self.messages.len() - 1]
    }

    fn next_time(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.last_time = now.max(self.last_time + 1);
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(kind: MessageKind, body: &str) -> Result<Reply, DispatchError> {
        Ok(Reply {
            body: body.to_string(),
            kind,
        })
    }

    fn failed() -> DispatchError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        DispatchError::Send(err)
    }

    #[test]
    fn test_submit_draft() {
        let mut conversation = Conversation::default();
        conversation.set_draft("hello");

        let job = conversation.submit_draft().unwrap();

        assert_eq!(conversation.draft(), "");
        assert_eq!(conversation.messages().len(), 1);
        let message = &conversation.messages()[0];
        assert_eq!(message.content, MessageContent::Text("hello".into()));
        assert_eq!(message.source, MessageSource::Local);
        assert_eq!(job.origin, message.time);
        assert_eq!(job.prompt, Prompt::Text("hello".into()));
    }

    #[test]
    fn test_submit_empty_draft() {
        let mut conversation = Conversation::default();
        assert!(conversation.submit_draft().is_none());
        assert!(conversation.messages().is_empty());
        assert_eq!(conversation.draft(), "");
    }

    #[test]
    fn test_whitespace_draft_is_sent_verbatim() {
        let mut conversation = Conversation::default();
        conversation.set_draft("  ");
        assert!(conversation.submit_draft().is_some());
        assert_eq!(
            conversation.messages()[0].content,
            MessageContent::Text("  ".into())
        );
    }

    #[test]
    fn test_pick_file() {
        let mut conversation = Conversation::default();
        let file = PickedFile::new("cat.png", Some("image/png".into()), vec![1, 2]);

        let job = conversation
            .pick_file(MessageKind::Image, Some(file.clone()))
            .unwrap();

        assert_eq!(job.prompt, Prompt::Image(file.clone()));
        assert_eq!(
            conversation.messages()[0].content,
            MessageContent::Image(MediaRef::Local(file))
        );
        assert_eq!(conversation.messages()[0].content.kind(), MessageKind::Image);
    }

    #[test]
    fn test_cancelled_pick_is_noop() {
        let mut conversation = Conversation::default();
        assert!(conversation.pick_file(MessageKind::Audio, None).is_none());
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn test_pick_text_kind_rejected() {
        let mut conversation = Conversation::default();
        let file = PickedFile::new("notes.txt", None, vec![1]);
        assert!(conversation.pick_file(MessageKind::Text, Some(file)).is_none());
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn test_model_applies_to_next_dispatch_only() {
        let mut conversation = Conversation::default();
        conversation.set_draft("first");
        let first = conversation.submit_draft().unwrap();

        conversation.select_model(SupportedModel::Gpt4All);
        conversation.select_reply_kind(MessageKind::Image);
        conversation.set_draft("second");
        let second = conversation.submit_draft().unwrap();

        assert_eq!(first.model, SupportedModel::OpenClip);
        assert_eq!(first.output, MessageKind::Text);
        assert_eq!(second.model, SupportedModel::Gpt4All);
        assert_eq!(second.output, MessageKind::Image);
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn test_record_reply_success() {
        let mut conversation = Conversation::default();
        let message = conversation.record_reply(reply(MessageKind::Audio, "http://x/a.wav"));
        assert_eq!(message.source, MessageSource::Remote);
        assert_eq!(
            message.content,
            MessageContent::Audio(MediaRef::Remote("http://x/a.wav".into()))
        );
    }

    #[test]
    fn test_record_reply_failure_keeps_history() {
        let mut conversation = Conversation::default();
        conversation.set_draft("hello");
        conversation.submit_draft();
        let before = conversation.messages().to_vec();

        conversation.record_reply(Err(failed()));

        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(&conversation.messages()[..1], &before[..]);
        let last = &conversation.messages()[1];
        assert_eq!(last.source, MessageSource::Remote);
        assert_eq!(last.content, MessageContent::Text(ERROR_REPLY.into()));
    }

    #[test]
    fn test_missing_client_appends_error_reply() {
        let mut conversation = Conversation::default();
        let message = conversation.record_reply(Err(DispatchError::Unavailable));
        assert_eq!(message.source, MessageSource::Remote);
        assert_eq!(message.content, MessageContent::Text(ERROR_REPLY.into()));
        assert_eq!(message.content.kind(), MessageKind::Text);
    }

    #[test]
    fn test_interleaved_replies_stay_ordered() {
        let mut conversation = Conversation::default();
        let mut jobs = Vec::new();
        for text in ["a", "b", "c"] {
            conversation.set_draft(text);
            jobs.push(conversation.submit_draft().unwrap());
        }

        // Replies land in reverse submission order, one of them failed.
        conversation.record_reply(reply(MessageKind::Text, "re: c"));
        conversation.record_reply(Err(failed()));
        conversation.record_reply(reply(MessageKind::Text, "re: a"));

        let messages = conversation.messages();
        assert_eq!(messages.len(), 6);
        assert!(messages.windows(2).all(|w| w[0].time < w[1].time));
        assert_eq!(messages[3].content, MessageContent::Text("re: c".into()));
        assert_eq!(messages[5].content, MessageContent::Text("re: a".into()));

        let origins: Vec<_> = jobs.iter().map(|j| j.origin).collect();
        assert_eq!(origins, vec![messages[0].time, messages[1].time, messages[2].time]);
    }
}

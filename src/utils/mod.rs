mod conversation;
mod error;
mod inference;
mod settings;
mod types;

pub use conversation::{Conversation, DispatchJob, ERROR_REPLY};
pub use error::{DispatchError, SettingsError};
pub use inference::*;
pub use settings::Settings;
pub use types::{
    MediaRef, Message, MessageContent, MessageKind, MessageSource, PickedFile, Prompt, Reply,
    SupportedModel,
};

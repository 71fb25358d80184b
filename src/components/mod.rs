mod chat_window;
mod header;
mod message_view;
mod model_selector;
mod prompt_bar;

pub use chat_window::ChatWindow;
pub use header::Header;
pub use message_view::MessageView;
pub use model_selector::{ModelSelector, ReplyKindSelector};
pub use prompt_bar::PromptBar;

use dioxus::prelude::*;

mod components;
mod utils;

use components::{ChatWindow, Header, ModelSelector, PromptBar, ReplyKindSelector};
use tracing::{debug, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::{Conversation, DispatchError, DispatchJob, InferenceClient, Settings};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let init = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modal_chat=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if let Err(e) = init {
        eprintln!("Failed to initialize logging: {}", e);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let settings = use_hook(|| {
        Settings::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load settings, using defaults");
            Settings::default()
        })
    });

    let client = use_hook(|| match InferenceClient::new(settings.endpoint.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            error!(error = %e, "Failed to create inference client");
            None
        }
    });

    // Messages, draft and selections for this page session
    let conversation =
        use_signal(|| Conversation::new(settings.default_model, settings.default_reply));

    // Each job runs on its own; replies are appended whenever they arrive
    let dispatch = move |job: DispatchJob| {
        let mut conversation = conversation;
        let DispatchJob {
            origin,
            model,
            prompt,
            output,
        } = job;

        let Some(client) = client.clone() else {
            conversation
                .write()
                .record_reply(Err(DispatchError::Unavailable));
            return;
        };

        spawn(async move {
            let result = client.dispatch(model, prompt, output).await;
            debug!(origin, ok = result.is_ok(), "Dispatch finished");
            conversation.write().record_reply(result);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "page",

            div {
                class: "chat-panel",

                Header { endpoint: settings.endpoint.clone() }

                ChatWindow { conversation }

                ModelSelector { conversation }

                ReplyKindSelector { conversation }

                PromptBar {
                    conversation,
                    on_dispatch: dispatch,
                }
            }
        }
    }
}

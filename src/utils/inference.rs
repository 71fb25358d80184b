use crate::utils::{DispatchError, MessageKind, PickedFile, Prompt, Reply, SupportedModel};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:2475/query";

// ============================================================================
// Request Types
// ============================================================================

/// Body of the single populated prompt field.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptPart {
    Text(String),
    Binary(PickedFile),
}

/// Everything that goes on the wire for one dispatch, before it becomes a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub model: &'static str,
    pub field: &'static str,
    pub part: PromptPart,
    pub accept: &'static str,
    pub output: MessageKind,
}

impl PromptRequest {
    pub fn new(model: SupportedModel, prompt: Prompt, output: MessageKind) -> Self {
        let (field, part) = match prompt {
            Prompt::Text(text) => ("text", PromptPart::Text(text)),
            Prompt::Image(file) => ("image", PromptPart::Binary(file)),
            Prompt::Audio(file) => ("audio", PromptPart::Binary(file)),
        };

        Self {
            model: model.id(),
            field,
            part,
            accept: output.accept(),
            output,
        }
    }

    pub fn into_form(self) -> Result<Form, DispatchError> {
        let form = Form::new().text("model", self.model);

        let form = match self.part {
            PromptPart::Text(text) => form.text(self.field, text),
            PromptPart::Binary(file) => {
                let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.name);
                if let Some(content_type) = file.content_type.as_deref() {
                    part = part
                        .mime_str(content_type)
                        .map_err(DispatchError::InvalidPart)?;
                }
                form.part(self.field, part)
            }
        };

        Ok(form)
    }
}

// ============================================================================
// Inference Client
// ============================================================================

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: Arc<String>,
}

impl InferenceClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DispatchError> {
        // No request timeout: a dispatch waits for as long as the server takes.
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(DispatchError::Client)?;

        Ok(Self {
            client,
            endpoint: Arc::new(endpoint.into()),
        })
    }

    /// Send one prompt and wait for the whole reply.
    ///
    /// The response status is not inspected; whatever body comes back is the reply.
    pub async fn dispatch(
        &self,
        model: SupportedModel,
        prompt: Prompt,
        output: MessageKind,
    ) -> Result<Reply, DispatchError> {
        info!(
            model = model.id(),
            input = prompt.kind().name(),
            output = output.name(),
            bytes = prompt.byte_len(),
            "Dispatching prompt"
        );

        let result = self.send(PromptRequest::new(model, prompt, output)).await;

        match &result {
            Ok(reply) => info!(
                model = model.id(),
                bytes = reply.body.len(),
                "Received reply"
            ),
            Err(e) => warn!(model = model.id(), error = %e, "Dispatch failed"),
        }

        result
    }

    async fn send(&self, request: PromptRequest) -> Result<Reply, DispatchError> {
        let accept = request.accept;
        let output = request.output;
        let form = request.into_form()?;

        debug!(endpoint = %self.endpoint, accept, "POST prompt");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(ACCEPT, accept)
            .multipart(form)
            .send()
            .await
            .map_err(DispatchError::Send)?;

        let body = response.text().await.map_err(DispatchError::ReadBody)?;

        Ok(Reply { body, kind: output })
    }
}

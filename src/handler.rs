use crate::backend::{LoggingBackend, OrderBackend};
use crate::config::HookConfig;
use crate::dispatch;
use crate::error::HookError;
use sodabot_types::{DialogResponse, IntentRequest};
use tracing::Instrument;

/// Entry point for the hosting runtime: one `handle` call per conversation
/// turn. Each invocation gets fresh input and fresh session attributes;
/// nothing survives between calls except the configuration the handler was
/// built with.
pub struct Handler<B = LoggingBackend> {
    backend: B,
    config: HookConfig,
}

impl Handler<LoggingBackend> {
    pub fn new(config: HookConfig) -> Self {
        Self {
            backend: LoggingBackend::default(),
            config,
        }
    }
}

impl<B> Handler<B>
where
    B: OrderBackend + Send + Sync,
{
    pub fn with_backend(backend: B, config: HookConfig) -> Self {
        Self { backend, config }
    }

    /// Route one raw runtime event and produce the turn's directive.
    ///
    /// Structurally invalid events fail with `MalformedRequest` before any
    /// handler runs.
    pub async fn handle(&self, event: serde_json::Value) -> Result<DialogResponse, HookError> {
        let request: IntentRequest =
            serde_json::from_value(event).map_err(HookError::MalformedRequest)?;

        let span = tracing::debug_span!(
            "code_hook",
            bot = request.bot().name(),
            timezone = %self.config.timezone,
        );

        dispatch::dispatch(&request, &self.backend)
            .instrument(span)
            .await
    }
}

use std::collections::HashMap;

/// Slot values accumulated by the bot runtime so far. A slot the user has
/// not filled yet arrives as an explicit null, so the value side is optional.
pub type Slots = HashMap<String, Option<String>>;

/// Free-form key/value state the runtime round-trips between turns of a
/// conversation. Owned by the caller; handlers read and write into it but
/// must pass unknown keys through untouched.
pub type SessionAttributes = HashMap<String, String>;

/// Which phase of the conversation triggered the current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InvocationSource {
    /// Pre-fulfillment validation turn.
    DialogCodeHook,
    /// Final fulfillment turn.
    FulfillmentCodeHook,
}

/// One intent-fulfillment event as delivered by the bot runtime.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    invocation_source: InvocationSource,

    user_id: String,

    bot: BotInfo,

    current_intent: CurrentIntent,

    /// May be absent or null on the first turn of a conversation.
    #[serde(default)]
    session_attributes: Option<SessionAttributes>,
}

impl IntentRequest {
    pub fn builder() -> IntentRequestBuilder {
        IntentRequestBuilder::new()
    }

    pub fn invocation_source(&self) -> InvocationSource {
        self.invocation_source
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn bot(&self) -> &BotInfo {
        &self.bot
    }

    pub fn current_intent(&self) -> &CurrentIntent {
        &self.current_intent
    }

    pub fn session_attributes(&self) -> Option<&SessionAttributes> {
        self.session_attributes.as_ref()
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BotInfo {
    name: String,
}

impl BotInfo {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CurrentIntent {
    name: String,
    slots: Slots,
}

impl CurrentIntent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }
}

pub struct IntentRequestBuilder {
    request: IntentRequest,
}

impl Default for IntentRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: IntentRequest {
                invocation_source: InvocationSource::FulfillmentCodeHook,
                user_id: String::new(),
                bot: BotInfo {
                    name: String::new(),
                },
                current_intent: CurrentIntent {
                    name: String::new(),
                    slots: Slots::new(),
                },
                session_attributes: None,
            },
        }
    }

    pub fn with_invocation_source(mut self, source: InvocationSource) -> Self {
        self.request.invocation_source = source;
        self
    }

    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.request.user_id = user_id.to_string();
        self
    }

    pub fn with_bot_name(mut self, name: &str) -> Self {
        self.request.bot.name = name.to_string();
        self
    }

    pub fn with_intent_name(mut self, name: &str) -> Self {
        self.request.current_intent.name = name.to_string();
        self
    }

    pub fn with_slot(mut self, name: &str, value: Option<&str>) -> Self {
        self.request
            .current_intent
            .slots
            .insert(name.to_string(), value.map(str::to_string));
        self
    }

    pub fn with_session_attribute(mut self, key: &str, value: &str) -> Self {
        self.request
            .session_attributes
            .get_or_insert_with(SessionAttributes::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> IntentRequest {
        self.request
    }
}

use crate::request::{SessionAttributes, Slots};

/// The directive returned to the bot runtime at the end of a turn.
///
/// Exactly one directive is produced per invocation, and the session
/// attributes are always echoed back, possibly mutated by the handler that
/// built the response.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    session_attributes: SessionAttributes,
    dialog_action: DialogAction,
}

impl DialogResponse {
    /// Ask the user for the value of `slot_to_elicit`, showing `message`.
    ///
    /// `slot_to_elicit` must name a slot declared on the intent; that is the
    /// caller's responsibility and is not validated here.
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: &str,
        slots: Slots,
        slot_to_elicit: &str,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot(ElicitSlotAction {
                intent_name: intent_name.to_string(),
                slots,
                slot_to_elicit: slot_to_elicit.to_string(),
                message,
            }),
        }
    }

    /// Ask the user a yes/no confirmation before fulfillment.
    pub fn confirm_intent(
        session_attributes: SessionAttributes,
        intent_name: &str,
        slots: Slots,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ConfirmIntent(ConfirmIntentAction {
                intent_name: intent_name.to_string(),
                slots,
                message,
            }),
        }
    }

    /// Terminal directive: end the turn with a final message to the user.
    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close(CloseAction {
                fulfillment_state,
                message,
            }),
        }
    }

    /// Hand control back to the runtime's own slot-filling logic.
    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate(DelegateAction { slots }),
        }
    }

    pub fn session_attributes(&self) -> &SessionAttributes {
        &self.session_attributes
    }

    pub fn dialog_action(&self) -> &DialogAction {
        &self.dialog_action
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    ElicitSlot(ElicitSlotAction),
    ConfirmIntent(ConfirmIntentAction),
    Close(CloseAction),
    Delegate(DelegateAction),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElicitSlotAction {
    intent_name: String,
    slots: Slots,
    slot_to_elicit: String,
    message: Message,
}

impl ElicitSlotAction {
    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn slot_to_elicit(&self) -> &str {
        &self.slot_to_elicit
    }

    pub fn message(&self) -> &Message {
        &self.message
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmIntentAction {
    intent_name: String,
    slots: Slots,
    message: Message,
}

impl ConfirmIntentAction {
    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn message(&self) -> &Message {
        &self.message
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseAction {
    fulfillment_state: FulfillmentState,
    message: Message,
}

impl CloseAction {
    pub fn fulfillment_state(&self) -> FulfillmentState {
        self.fulfillment_state
    }

    pub fn message(&self) -> &Message {
        &self.message
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DelegateAction {
    slots: Slots,
}

impl DelegateAction {
    pub fn slots(&self) -> &Slots {
        &self.slots
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// A message shown (or spoken) to the end user.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    content_type: ContentType,
    content: String,
}

impl Message {
    pub fn plain_text(content: &str) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.to_string(),
        }
    }

    pub fn ssml(content: &str) -> Self {
        Self {
            content_type: ContentType::Ssml,
            content: content.to_string(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn close_takes_the_documented_wire_shape() {
        let mut session = SessionAttributes::new();
        session.insert("currentOrder".to_string(), "{}".to_string());

        let response = DialogResponse::close(
            session,
            FulfillmentState::Fulfilled,
            Message::plain_text("Thanks, I have placed your order for a Large Cola"),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sessionAttributes"]["currentOrder"], "{}");
        assert_eq!(json["dialogAction"]["type"], "Close");
        assert_eq!(json["dialogAction"]["fulfillmentState"], "Fulfilled");
        assert_eq!(json["dialogAction"]["message"]["contentType"], "PlainText");
        assert_eq!(
            json["dialogAction"]["message"]["content"],
            "Thanks, I have placed your order for a Large Cola"
        );
    }

    #[test]
    fn elicit_slot_carries_the_slot_name_and_prompt() {
        let mut slots: Slots = HashMap::new();
        slots.insert("BeverageSize".to_string(), None);

        let response = DialogResponse::elicit_slot(
            SessionAttributes::new(),
            "sodaOrderBeverageIntent",
            slots,
            "BeverageSize",
            Message::plain_text("What size would you like?"),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "ElicitSlot");
        assert_eq!(
            json["dialogAction"]["intentName"],
            "sodaOrderBeverageIntent"
        );
        assert_eq!(json["dialogAction"]["slotToElicit"], "BeverageSize");
        assert!(json["dialogAction"]["slots"]["BeverageSize"].is_null());
    }

    #[test]
    fn delegate_carries_slots_and_no_message() {
        let mut slots: Slots = HashMap::new();
        slots.insert("BeverageType".to_string(), Some("Cola".to_string()));

        let response = DialogResponse::delegate(SessionAttributes::new(), slots);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "Delegate");
        assert_eq!(json["dialogAction"]["slots"]["BeverageType"], "Cola");
        assert!(json["dialogAction"].get("message").is_none());
    }

    #[test]
    fn confirm_intent_asks_before_fulfillment() {
        let response = DialogResponse::confirm_intent(
            SessionAttributes::new(),
            "sodaOrderBeverageIntent",
            Slots::new(),
            Message::plain_text("Should I place the order?"),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "ConfirmIntent");
        assert_eq!(
            json["dialogAction"]["message"]["content"],
            "Should I place the order?"
        );
    }

    #[test]
    fn ssml_messages_use_the_uppercase_discriminator() {
        let message = Message::ssml("<speak>done</speak>");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["contentType"], "SSML");
    }
}

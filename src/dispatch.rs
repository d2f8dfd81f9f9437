use crate::backend::OrderBackend;
use crate::error::HookError;
use crate::intents::order_beverage;
use sodabot_types::{DialogResponse, IntentRequest};

/// Intent served by the beverage-order handler.
pub const ORDER_BEVERAGE_INTENT: &str = "sodaOrderBeverageIntent";

/// Route a request to the handler registered for its intent. An intent name
/// no handler claims fails the turn with `UnsupportedIntent`; the hosting
/// runtime surfaces that to the end user as an internal error.
pub async fn dispatch<B>(request: &IntentRequest, backend: &B) -> Result<DialogResponse, HookError>
where
    B: OrderBackend + Send + Sync,
{
    tracing::debug!(
        user_id = request.user_id(),
        intent = request.current_intent().name(),
        "dispatching intent"
    );

    match request.current_intent().name() {
        ORDER_BEVERAGE_INTENT => order_beverage::order_soda(request, backend).await,
        other => Err(HookError::UnsupportedIntent(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockOrderBackend, Receipt};
    use chrono::Utc;
    use sodabot_types::{DialogAction, IntentRequest, InvocationSource};

    #[tokio::test]
    async fn known_intent_reaches_the_order_handler() {
        let mut backend = MockOrderBackend::new();
        backend
            .expect_place()
            .once()
            .returning(|_| Box::pin(async { Ok(Receipt::new("order-0", Utc::now())) }));

        let request = IntentRequest::builder()
            .with_invocation_source(InvocationSource::FulfillmentCodeHook)
            .with_intent_name(ORDER_BEVERAGE_INTENT)
            .with_slot("BeverageSize", Some("Large"))
            .with_slot("BeverageType", Some("Cola"))
            .with_slot("MixIn", None)
            .build();

        let response = dispatch(&request, &backend).await.unwrap();
        assert!(matches!(response.dialog_action(), DialogAction::Close(_)));
    }

    #[tokio::test]
    async fn unknown_intent_fails_with_its_name() {
        let backend = MockOrderBackend::new();
        let request = IntentRequest::builder()
            .with_intent_name("bookHotelIntent")
            .build();

        match dispatch(&request, &backend).await {
            Err(HookError::UnsupportedIntent(name)) => assert_eq!(name, "bookHotelIntent"),
            other => panic!("expected UnsupportedIntent, got {:?}", other),
        }
    }
}

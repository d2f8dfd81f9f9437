use crate::backend::OrderBackend;
use crate::error::HookError;
use crate::order::Order;
use sodabot_types::{DialogResponse, FulfillmentState, IntentRequest, InvocationSource, Message};

/// Dialog management and fulfillment for ordering a soda.
///
/// The order snapshot is rebuilt from the current slot values on every turn
/// and written into the session attributes, so the runtime always carries
/// the latest state between turns.
pub async fn order_soda<B>(
    request: &IntentRequest,
    backend: &B,
) -> Result<DialogResponse, HookError>
where
    B: OrderBackend + Send + Sync,
{
    let slots = request.current_intent().slots();
    let order = Order::from_slots(slots);

    let mut session = request.session_attributes().cloned().unwrap_or_default();
    order.record_current(&mut session);

    if request.invocation_source() == InvocationSource::DialogCodeHook {
        // Validation hook for the dialog phase. Every slot combination is
        // accepted today; a rejected value would re-prompt from here with
        // `DialogResponse::elicit_slot` instead of reaching fulfillment.
        tracing::trace!("dialog phase validation passed");
    }

    let order_text = order.description();
    tracing::debug!(order = %order.to_attribute(), text = %order_text, "fulfilling beverage order");

    let receipt = backend.place(&order).await?;
    tracing::debug!(reference = receipt.reference(), "order accepted by backend");

    order.record_confirmed(&mut session);

    Ok(DialogResponse::close(
        session,
        FulfillmentState::Fulfilled,
        Message::plain_text(&format!(
            "Thanks, I have placed your order for a {order_text}"
        )),
    ))
}

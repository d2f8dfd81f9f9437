use crate::error::HookError;
use crate::order::Order;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Receipt returned by the ordering backend once an order is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    reference: String,
    placed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(reference: &str, placed_at: DateTime<Utc>) -> Self {
        Self {
            reference: reference.to_string(),
            placed_at,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

// The `OrderBackend` trait is the seam between dialog management and the
// service that actually takes orders. Fulfillment logic depends only on
// this abstraction, so unit tests run against `mockall`'s generated
// `MockOrderBackend` and a deployment can swap in an HTTP client without
// touching any handler code. Retry policy belongs to the implementation
// behind the seam, not to the caller.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait OrderBackend {
    async fn place(&self, order: &Order) -> Result<Receipt, HookError>;
}

/// Stand-in backend: records the order in the log and mints a sequential
/// reference. Keeps the hook usable end to end until a real ordering
/// service is wired in.
#[derive(Debug, Default)]
pub struct LoggingBackend {
    next_reference: AtomicU64,
}

#[async_trait]
impl OrderBackend for LoggingBackend {
    async fn place(&self, order: &Order) -> Result<Receipt, HookError> {
        let sequence = self.next_reference.fetch_add(1, Ordering::Relaxed);
        let reference = format!("order-{sequence}");
        tracing::debug!(
            reference = %reference,
            order = %order.to_attribute(),
            "recording order"
        );
        Ok(Receipt::new(&reference, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sodabot_types::Slots;

    #[tokio::test]
    async fn logging_backend_mints_sequential_references() {
        let backend = LoggingBackend::default();
        let order = Order::from_slots(&Slots::new());

        let first = backend.place(&order).await.unwrap();
        let second = backend.place(&order).await.unwrap();

        assert_eq!(first.reference(), "order-0");
        assert_eq!(second.reference(), "order-1");
        assert!(second.placed_at() >= first.placed_at());
    }
}

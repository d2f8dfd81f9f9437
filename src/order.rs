use crate::slots::optional_slot;
use sodabot_types::{SessionAttributes, Slots};

/// Session attribute holding the serialized order for the current turn.
pub const CURRENT_ORDER_KEY: &str = "currentOrder";

/// Session attribute recording the last order that reached fulfillment.
pub const LAST_CONFIRMED_ORDER_KEY: &str = "lastConfirmedOrder";

/// Snapshot of the three beverage slots. Rebuilt from the current slot
/// values on every invocation and written into the session attributes,
/// superseding whatever a previous turn stored there.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    #[serde(rename = "BeverageSize")]
    beverage_size: Option<String>,

    #[serde(rename = "BeverageType")]
    beverage_type: Option<String>,

    #[serde(rename = "MixIn")]
    mix_in: Option<String>,
}

impl Order {
    pub fn from_slots(slots: &Slots) -> Self {
        Self {
            beverage_size: optional_slot(slots, "BeverageSize").map(str::to_string),
            beverage_type: optional_slot(slots, "BeverageType").map(str::to_string),
            mix_in: optional_slot(slots, "MixIn").map(str::to_string),
        }
    }

    pub fn beverage_size(&self) -> Option<&str> {
        self.beverage_size.as_deref()
    }

    pub fn beverage_type(&self) -> Option<&str> {
        self.beverage_type.as_deref()
    }

    pub fn mix_in(&self) -> Option<&str> {
        self.mix_in.as_deref()
    }

    /// Human-readable order text: `"{size} {type}"`, or
    /// `"{size} {mixin} {type}"` when a mix-in was requested. Unfilled
    /// slots are left out.
    pub fn description(&self) -> String {
        [&self.beverage_size, &self.mix_in, &self.beverage_type]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The serialized form stored under [`CURRENT_ORDER_KEY`] and
    /// [`LAST_CONFIRMED_ORDER_KEY`].
    pub fn to_attribute(&self) -> String {
        serde_json::json!(self).to_string()
    }

    pub fn record_current(&self, session: &mut SessionAttributes) {
        session.insert(CURRENT_ORDER_KEY.to_string(), self.to_attribute());
    }

    pub fn record_confirmed(&self, session: &mut SessionAttributes) {
        session.insert(LAST_CONFIRMED_ORDER_KEY.to_string(), self.to_attribute());
    }
}

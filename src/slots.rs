use crate::error::HookError;
use chrono::NaiveDate;
use sodabot_types::Slots;

/// Look up a slot by name. A slot the runtime never sent and a slot sent as
/// an explicit null both read as `None`; absence of a key is not an error.
pub fn optional_slot<'a>(slots: &'a Slots, name: &str) -> Option<&'a str> {
    slots.get(name).and_then(|value| value.as_deref())
}

/// Parse an optional numeric slot. `None` passes through unchanged; a
/// non-null, non-numeric value fails the turn with `InvalidNumber`.
pub fn int_slot(slots: &Slots, name: &str) -> Result<Option<i64>, HookError> {
    match optional_slot(slots, name) {
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| HookError::InvalidNumber(value.to_string())),
        None => Ok(None),
    }
}

/// Parse an optional date slot. The runtime resolves date slot types to
/// ISO-8601 calendar dates before the hook sees them.
pub fn date_slot(slots: &Slots, name: &str) -> Result<Option<NaiveDate>, HookError> {
    match optional_slot(slots, name) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| HookError::InvalidDate(value.to_string())),
        None => Ok(None),
    }
}

/// Everything a code-hook turn can fail with. A turn either fully succeeds
/// with one directive or fails with one of these; there are no partial
/// results.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("malformed intent request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    #[error("slot value {0:?} is not a number")]
    InvalidNumber(String),

    #[error("slot value {0:?} is not an ISO-8601 date")]
    InvalidDate(String),

    #[error("order backend failed: {0}")]
    Backend(#[source] anyhow::Error),
}

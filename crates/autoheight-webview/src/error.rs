//! Error types for the auto-height core.
//!
//! Nothing here is ever surfaced to the host as a panic: decode failures are
//! absorbed where the message arrives, and control operations on a torn-down
//! view report `StaleHandle` instead of touching freed state.

/// Why an inbound size report was rejected.
///
/// The page side is arbitrary, untrusted content, so malformed and partial
/// payloads are expected traffic, not faults.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("size report is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("size report missing numeric field: {0}")]
    MissingField(&'static str),

    #[error("size report field out of range: {0}")]
    OutOfRange(&'static str),
}

/// Errors surfaced by the view controller and its control surface.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("control handle is stale: embedding already torn down")]
    StaleHandle,

    #[error("engine error: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let err = DecodeError::MissingField("width");
        assert_eq!(err.to_string(), "size report missing numeric field: width");

        let err = DecodeError::OutOfRange("height");
        assert_eq!(err.to_string(), "size report field out of range: height");

        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DecodeError::from(json_err);
        assert!(err.to_string().starts_with("size report is not valid JSON"));
    }

    #[test]
    fn view_error_display() {
        let err = ViewError::StaleHandle;
        assert_eq!(
            err.to_string(),
            "control handle is stale: embedding already torn down"
        );

        let err = ViewError::Engine("evaluate failed".into());
        assert_eq!(err.to_string(), "engine error: evaluate failed");
    }
}

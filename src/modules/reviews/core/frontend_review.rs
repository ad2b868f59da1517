use serde_json::{Map, Value};

/// Key attribute of the frontend review table.
pub const FRONTEND_REVIEW_KEY: &str = "ReviewId";

/// A review written by the frontend. Only the key is interpreted; the rest of
/// the payload belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendReview {
    pub review_id: String,
    pub payload: Map<String, Value>,
}

impl FrontendReview {
    /// Builds a frontend review from a JSON body. Returns `None` when the body
    /// is not an object or carries no non-empty string key.
    pub fn from_payload(payload: Value) -> Option<Self> {
        let Value::Object(payload) = payload else {
            return None;
        };
        let review_id = payload
            .get(FRONTEND_REVIEW_KEY)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())?
            .to_string();
        Some(Self { review_id, payload })
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.payload)
    }
}

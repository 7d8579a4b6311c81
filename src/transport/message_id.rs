use serde::Deserialize;

use crate::domain::MessageId;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains an empty {field}")]
    EmptyMessageId { field: &'static str },
}

#[derive(Debug, Deserialize)]
struct MessageIdJsonResponse {
    #[serde(rename = "MessageId")]
    message_id: String,
}

/// Decode the `{"MessageId": "..."}` body returned with 200/201.
pub fn decode_message_id_json_response(json: &str) -> Result<MessageId, TransportError> {
    let parsed: MessageIdJsonResponse = serde_json::from_str(json)?;
    if parsed.message_id.is_empty() {
        return Err(TransportError::EmptyMessageId {
            field: MessageId::FIELD,
        });
    }
    Ok(MessageId::new(parsed.message_id))
}

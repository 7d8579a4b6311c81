//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod email;
mod message_id;
mod sms;

pub use email::{EMAIL_PATH, encode_send_email_json};
pub use message_id::decode_message_id_json_response;
pub use sms::{SMS_PATH, encode_send_sms_json};

use crate::domain::BearerToken;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header set sent with every Raven request.
pub fn request_headers(token: &BearerToken) -> Vec<(String, String)> {
    vec![
        ("Authorization".to_owned(), token.header_value()),
        ("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned()),
    ]
}

/// Join the base URL and an endpoint path by plain concatenation.
///
/// The base URL is expected to end with `/`; nothing is inserted or stripped.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_bearer_token_and_json_content_type() {
        let headers = request_headers(&BearerToken::new("t0k"));
        assert_eq!(
            headers,
            vec![
                ("Authorization".to_owned(), "Bearer t0k".to_owned()),
                ("Content-Type".to_owned(), "application/json".to_owned()),
            ]
        );
    }

    #[test]
    fn endpoint_url_concatenates_verbatim() {
        assert_eq!(
            endpoint_url("https://api.example.invalid/v1/", EMAIL_PATH),
            "https://api.example.invalid/v1/messaging/email"
        );
        assert_eq!(endpoint_url("", SMS_PATH), "messaging/sms");
    }
}

use serde::Serialize;

use crate::domain::SendEmail;

/// Path of the email endpoint, relative to the configured base URL.
pub const EMAIL_PATH: &str = "messaging/email";

const DISABLE_DEFAULT_TEMPLATE: bool = true;
const DISABLE_MESSAGE_ENCRYPTION: bool = true;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct EmailJsonRequest<'a> {
    recipient: &'a str,
    subject: &'a str,
    body: &'a str,
    from: &'a str,
    disable_default_template: bool,
    disable_message_encryption: bool,
}

pub fn encode_send_email_json(request: &SendEmail) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&EmailJsonRequest {
        recipient: request.recipient(),
        subject: request.subject(),
        body: request.body(),
        from: request.sender(),
        disable_default_template: DISABLE_DEFAULT_TEMPLATE,
        disable_message_encryption: DISABLE_MESSAGE_ENCRYPTION,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn encode_uses_pascal_case_field_names() {
        let request = SendEmail::new("to@example.com", "noreply@example.com", "Hello", "Body text");
        let bytes = encode_send_email_json(&request).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            json!({
                "Recipient": "to@example.com",
                "Subject": "Hello",
                "Body": "Body text",
                "From": "noreply@example.com",
                "DisableDefaultTemplate": true,
                "DisableMessageEncryption": true,
            })
        );
    }

    #[test]
    fn encode_always_disables_template_and_encryption() {
        let request = SendEmail::new("", "", "", "");
        let bytes = encode_send_email_json(&request).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["DisableDefaultTemplate"], Value::Bool(true));
        assert_eq!(value["DisableMessageEncryption"], Value::Bool(true));
    }

    #[test]
    fn encode_escapes_special_characters() {
        let request = SendEmail::new("a@b.c", "d@e.f", "quote \" here", "line1\nline2 ✓");
        let bytes = encode_send_email_json(&request).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["Subject"], "quote \" here");
        assert_eq!(value["Body"], "line1\nline2 ✓");
    }
}

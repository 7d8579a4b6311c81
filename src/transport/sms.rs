use serde::Serialize;

use crate::domain::SendSms;

/// Path of the SMS endpoint, relative to the configured base URL.
pub const SMS_PATH: &str = "messaging/sms";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SmsJsonRequest<'a> {
    phone: &'a str,
    text: &'a str,
}

pub fn encode_send_sms_json(request: &SendSms) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&SmsJsonRequest {
        phone: request.phone(),
        text: request.text(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn encode_sms_body() {
        let request = SendSms::new("+79251234567", "hello");
        let bytes = encode_send_sms_json(&request).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value, json!({ "Phone": "+79251234567", "Text": "hello" }));
    }
}

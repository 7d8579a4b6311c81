//! Domain layer: caller-facing value types (no I/O).

mod request;
mod value;

pub use request::{SendEmail, SendSms};
pub use value::{BearerToken, MessageId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_renders_authorization_value() {
        let token = BearerToken::new("secret");
        assert_eq!(token.as_str(), "secret");
        assert_eq!(token.header_value(), "Bearer secret");
    }

    #[test]
    fn bearer_token_debug_is_redacted() {
        let token = BearerToken::new("secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("secret"), "token leaked: {rendered}");
    }

    #[test]
    fn empty_token_is_accepted() {
        assert_eq!(BearerToken::new("").header_value(), "Bearer ");
    }

    #[test]
    fn message_id_compares_with_str() {
        let id = MessageId::new("abc123".to_owned());
        assert_eq!(id, "abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.into_string(), "abc123");
    }

    #[test]
    fn send_email_keeps_fields_as_provided() {
        let email = SendEmail::new("to@example.com", "from@example.com", " Hi ", "");
        assert_eq!(email.recipient(), "to@example.com");
        assert_eq!(email.sender(), "from@example.com");
        assert_eq!(email.subject(), " Hi ");
        assert_eq!(email.body(), "");
    }
}

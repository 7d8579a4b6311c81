/// An email to queue through `messaging/email`.
///
/// Default templating and message-level encryption are always disabled for
/// emails sent by this crate; there is no field to turn them back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmail {
    recipient: String,
    sender: String,
    subject: String,
    body: String,
}

impl SendEmail {
    pub fn new(
        recipient: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            sender: from.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A text message to queue through `messaging/sms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    phone: String,
    text: String,
}

impl SendSms {
    pub fn new(phone: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            text: text.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

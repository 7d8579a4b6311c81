use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Raven API bearer token.
///
/// Sent as `Authorization: Bearer <token>` on every request. The value is kept as
/// provided; an empty token is not rejected here and fails at call time instead.
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the `Authorization` header value (`Bearer <token>`).
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl From<&str> for BearerToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BearerToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Provider-assigned identifier of a queued email or SMS (`MessageId`).
///
/// Invariant: non-empty. Instances are only produced by decoding a successful
/// response.
pub struct MessageId(String);

impl MessageId {
    /// JSON field name used by Raven (`MessageId`).
    pub const FIELD: &'static str = "MessageId";

    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the identifier string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MessageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MessageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

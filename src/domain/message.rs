use std::fmt;

use crate::domain::validation::ValidationError;

/// Maximum length of [`SmsMessage::client_ref`], in characters.
pub const CLIENT_REF_MAX_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message type (`type`).
pub enum MessageType {
    #[default]
    Text,
    Binary,
    WapPush,
    Unicode,
    VCal,
    VCard,
}

impl MessageType {
    /// Form field name used by Nexmo (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire value for the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::WapPush => "wappush",
            Self::Unicode => "unicode",
            Self::VCal => "vcal",
            Self::VCard => "vcard",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// GSM message class (`message-class`).
pub enum MessageClass {
    /// Displayed on screen without being stored, unless the user saves it.
    Flash,
    /// Stored in device memory or on the SIM card.
    Standard,
    /// Carries SIM card data; must reach the SIM before acknowledgment.
    SimData,
    /// Forwarded to an external device; acknowledged regardless of forwarding.
    Forward,
}

impl MessageClass {
    /// Form field name used by Nexmo (`message-class`).
    pub const FIELD: &'static str = "message-class";

    /// Numeric class as sent on the wire (`0..=3`).
    pub fn code(self) -> u8 {
        match self {
            Self::Flash => 0,
            Self::Standard => 1,
            Self::SimData => 2,
            Self::Forward => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Flash => "flash",
            Self::Standard => "standard",
            Self::SimData => "SIM data",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A single outbound message for `sms/json`.
///
/// Fields are public so callers can fill in exactly what they need; invariants are
/// checked by [`SmsMessage::validate`], which `Sms::send` calls before any I/O.
/// Empty optional values are never put on the wire.
pub struct SmsMessage {
    pub from: String,
    pub to: String,
    pub kind: MessageType,
    pub text: Option<String>,
    pub status_report_required: bool,
    pub client_ref: Option<String>,
    pub network_code: Option<String>,
    pub vcard: Option<String>,
    pub vcal: Option<String>,
    /// Delivery time-to-live in milliseconds.
    pub ttl: Option<u32>,
    pub class: Option<MessageClass>,
    /// Binary payload, required for [`MessageType::Binary`]. Sent hex-encoded.
    pub body: Vec<u8>,
    /// User data header, required for [`MessageType::Binary`]. Sent hex-encoded.
    pub udh: Vec<u8>,
    /// Title shown to the recipient of a WAP push.
    pub title: Option<String>,
    /// WAP push URL.
    pub url: Option<String>,
    /// How long the WAP push is available, in milliseconds.
    pub validity: Option<u32>,
}

impl SmsMessage {
    pub fn text(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageType::Text,
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn unicode(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageType::Unicode,
            ..Self::text(from, to, text)
        }
    }

    pub fn binary(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<Vec<u8>>,
        udh: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageType::Binary,
            body: body.into(),
            udh: udh.into(),
            ..Default::default()
        }
    }

    pub fn wap_push(
        from: impl Into<String>,
        to: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageType::WapPush,
            title: Some(title.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn vcard(from: impl Into<String>, to: impl Into<String>, vcard: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageType::VCard,
            vcard: Some(vcard.into()),
            ..Default::default()
        }
    }

    pub fn vcal(from: impl Into<String>, to: impl Into<String>, vcal: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: MessageType::VCal,
            vcal: Some(vcal.into()),
            ..Default::default()
        }
    }

    /// Check sender, recipient, client reference and the fields the message type requires.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::Empty { field: "from" });
        }
        if self.to.is_empty() {
            return Err(ValidationError::Empty { field: "to" });
        }
        if let Some(client_ref) = self.client_ref.as_deref() {
            let actual = client_ref.chars().count();
            if actual > CLIENT_REF_MAX_CHARS {
                return Err(ValidationError::ClientRefTooLong {
                    max: CLIENT_REF_MAX_CHARS,
                    actual,
                });
            }
        }

        match self.kind {
            MessageType::Unicode if is_blank(self.text.as_deref()) => {
                Err(ValidationError::MissingUnicodeText)
            }
            MessageType::Binary if self.body.is_empty() || self.udh.is_empty() => {
                Err(ValidationError::IncompleteBinary)
            }
            MessageType::WapPush
                if is_blank(self.url.as_deref()) || is_blank(self.title.as_deref()) =>
            {
                Err(ValidationError::IncompleteWapPush)
            }
            _ => Ok(()),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

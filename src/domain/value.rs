use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nexmo API key.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Nexmo (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo API secret.
///
/// Invariant: non-empty after trimming. `Debug` output never contains the value.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Form field name used by Nexmo (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

/// Phone number normalized to E.164.
///
/// Nexmo expects recipients in international format without the leading `+`;
/// use [`PhoneNumber::msisdn`] for that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    /// Form field name used by Nexmo for recipients (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, input).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: input.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self { e164 })
    }

    /// Normalized E.164 representation (`+14155550100`).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// MSISDN as Nexmo expects it (`14155550100`).
    pub fn msisdn(&self) -> &str {
        self.e164.trim_start_matches('+')
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.msisdn().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-message status reported by Nexmo in each message report.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ResponseCode(u32);

impl ResponseCode {
    /// Construct a response code from its integer representation.
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Nexmo.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(self) -> Option<KnownResponseCode> {
        KnownResponseCode::from_code(self.0)
    }

    /// Returns `true` if the message was accepted.
    pub fn is_success(self) -> bool {
        self.known() == Some(KnownResponseCode::Success)
    }

    /// Returns `true` if this code is considered transient by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if this code represents an authentication failure.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(kind) => f.write_str(kind.name()),
            None => write!(f, "Unknown status {}", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Nexmo SMS status codes, numbered as the provider sends them (10, 17
/// and 18 are unassigned).
///
/// Unknown codes are preserved as [`ResponseCode`] and return `None` from
/// [`KnownResponseCode::from_code`].
pub enum KnownResponseCode {
    Success,
    Throttled,
    MissingParams,
    InvalidParams,
    InvalidCredentials,
    InternalError,
    InvalidMessage,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaExceeded,
    RestNotEnabled,
    MessageTooLong,
    CommunicationFailed,
    InvalidSignature,
    InvalidSenderAddress,
    InvalidTtl,
    FacilityNotAllowed,
    InvalidMessageClass,
}

impl KnownResponseCode {
    /// Convert a raw Nexmo status into a known variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParams,
            3 => Self::InvalidParams,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaExceeded,
            11 => Self::RestNotEnabled,
            12 => Self::MessageTooLong,
            13 => Self::CommunicationFailed,
            14 => Self::InvalidSignature,
            15 => Self::InvalidSenderAddress,
            16 => Self::InvalidTtl,
            19 => Self::FacilityNotAllowed,
            20 => Self::InvalidMessageClass,
            _ => return None,
        })
    }

    /// The numeric code as sent by Nexmo.
    pub fn code(self) -> u32 {
        match self {
            Self::Success => 0,
            Self::Throttled => 1,
            Self::MissingParams => 2,
            Self::InvalidParams => 3,
            Self::InvalidCredentials => 4,
            Self::InternalError => 5,
            Self::InvalidMessage => 6,
            Self::NumberBarred => 7,
            Self::PartnerAccountBarred => 8,
            Self::PartnerQuotaExceeded => 9,
            Self::RestNotEnabled => 11,
            Self::MessageTooLong => 12,
            Self::CommunicationFailed => 13,
            Self::InvalidSignature => 14,
            Self::InvalidSenderAddress => 15,
            Self::InvalidTtl => 16,
            Self::FacilityNotAllowed => 19,
            Self::InvalidMessageClass => 20,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Throttled => "Throttled",
            Self::MissingParams => "Missing params",
            Self::InvalidParams => "Invalid params",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InternalError => "Internal error",
            Self::InvalidMessage => "Invalid message",
            Self::NumberBarred => "Number barred",
            Self::PartnerAccountBarred => "Partner account barred",
            Self::PartnerQuotaExceeded => "Partner quota exceeded",
            Self::RestNotEnabled => "Account not enabled for REST",
            Self::MessageTooLong => "Message too long",
            Self::CommunicationFailed => "Communication failed",
            Self::InvalidSignature => "Invalid signature",
            Self::InvalidSenderAddress => "Invalid sender address",
            Self::InvalidTtl => "Invalid TTL",
            Self::FacilityNotAllowed => "Facility not allowed",
            Self::InvalidMessageClass => "Invalid message class",
        }
    }

    /// Whether this status is likely transient and can be retried by the caller.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::InternalError | Self::CommunicationFailed
        )
    }

    /// Whether this status indicates invalid credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::InvalidSignature)
    }
}

impl fmt::Display for KnownResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_trim_and_reject_empty() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let secret = ApiSecret::new(" secret ").unwrap();
        assert_eq!(secret.as_str(), "secret");
        assert!(matches!(
            ApiSecret::new(""),
            Err(ValidationError::Empty {
                field: ApiSecret::FIELD
            })
        ));
    }

    #[test]
    fn api_secret_debug_is_redacted() {
        let secret = ApiSecret::new("hunter2").unwrap();
        assert_eq!(format!("{secret:?}"), "ApiSecret(***)");
    }

    #[test]
    fn phone_number_exposes_e164_and_msisdn() {
        let p1 = PhoneNumber::parse(None, "+44 7700 900123").unwrap();
        let p2 = PhoneNumber::parse(Some(country::Id::GB), "07700900123").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+447700900123");
        assert_eq!(p1.msisdn(), "447700900123");

        let to: String = p1.into();
        assert_eq!(to, "447700900123");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(PhoneNumber::parse(None, "  ").is_err());
    }

    #[test]
    fn response_code_known_mapping_roundtrips() {
        for code in (0..=9).chain(11..=16).chain([19, 20]) {
            let kind = KnownResponseCode::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(KnownResponseCode::from_code(10), None);
        assert_eq!(KnownResponseCode::from_code(17), None);
        assert_eq!(KnownResponseCode::from_code(99), None);
        assert_eq!(
            KnownResponseCode::from_code(11),
            Some(KnownResponseCode::RestNotEnabled)
        );
        assert_eq!(
            KnownResponseCode::from_code(20),
            Some(KnownResponseCode::InvalidMessageClass)
        );
    }

    #[test]
    fn response_code_display_uses_known_names() {
        assert_eq!(ResponseCode::new(0).to_string(), "Success");
        assert_eq!(
            ResponseCode::new(11).to_string(),
            "Account not enabled for REST"
        );
        assert_eq!(ResponseCode::new(77).to_string(), "Unknown status 77");
    }

    #[test]
    fn response_code_helpers_cover_known_kinds() {
        assert!(ResponseCode::new(0).is_success());
        assert!(!ResponseCode::new(1).is_success());

        let throttled = ResponseCode::new(1);
        assert!(throttled.is_retryable());
        assert!(!throttled.is_auth_error());

        let auth = ResponseCode::new(4);
        assert!(auth.is_auth_error());
        assert!(!auth.is_retryable());

        let unknown = ResponseCode::new(9999);
        assert!(unknown.known().is_none());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }
}

use std::str::FromStr;

use serde::Deserialize;
use serde::de::Error as DeError;

use super::TransportError;

/// Numeric value that Nexmo sends as a quoted JSON string (`"3"`, `"0.67"`).
///
/// Bare JSON numbers are accepted as well; the raw token is kept until the
/// caller picks a target type with [`QuotedNumber::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedNumber(String);

impl QuotedNumber {
    pub fn parse<T: FromStr>(&self, field: &'static str) -> Result<T, TransportError> {
        self.0
            .trim()
            .parse::<T>()
            .map_err(|_| TransportError::InvalidNumber {
                field,
                value: self.0.clone(),
            })
    }
}

impl<'de> Deserialize<'de> for QuotedNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected numeric field to be JSON string or number",
            )),
        }
    }
}

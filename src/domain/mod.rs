//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod request;
mod response;
mod validation;
mod value;

pub use message::{CLIENT_REF_MAX_CHARS, MessageClass, MessageType, SmsMessage};
pub use request::NumberSearchOptions;
pub use response::{AvailableNumber, MessageReport, MessageResponse, NumberSearchResponse};
pub use validation::ValidationError;
pub use value::{ApiKey, ApiSecret, KnownResponseCode, PhoneNumber, ResponseCode};

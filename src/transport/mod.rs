//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod number;
mod quoted;
mod sms;

use url::Url;

pub use number::{
    buy_number_url, cancel_number_url, decode_number_search_json_response, search_numbers_url,
};
pub use sms::{decode_message_json_response, encode_sms_form, sms_json_url};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field {field} is not a valid number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("api root cannot be used as a base URL: {0}")]
    CannotBeABase(String),
}

/// Append path segments to the api root, percent-encoding each one.
fn endpoint_url(api_root: &Url, segments: &[&str]) -> Result<Url, TransportError> {
    let mut url = api_root.clone();
    url.path_segments_mut()
        .map_err(|()| TransportError::CannotBeABase(api_root.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

use crate::config::ClientConfig;
use crate::domain::{ApiKey, ApiSecret, MessageResponse, SmsMessage};

use super::{HttpTransport, NexmoError, non_empty_body};

/// Messaging resource (`sms/json`), borrowed from [`super::NexmoClient::sms`].
pub struct Sms<'a> {
    config: &'a ClientConfig,
    http: &'a dyn HttpTransport,
}

impl<'a> Sms<'a> {
    pub(super) fn new(config: &'a ClientConfig, http: &'a dyn HttpTransport) -> Self {
        Self { config, http }
    }

    /// Send one message.
    ///
    /// The message is validated first; nothing is sent if that fails. Unless the
    /// client is in OAuth mode, `api_key` and `api_secret` are added to the form.
    ///
    /// Errors:
    /// - [`NexmoError::Validation`] for an invalid message,
    /// - [`NexmoError::Transport`] when the request could not be made,
    /// - [`NexmoError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NexmoError::Parse`] when the body is not the expected JSON.
    pub async fn send(&self, message: &SmsMessage) -> Result<MessageResponse, NexmoError> {
        message.validate()?;

        let url = crate::transport::sms_json_url(self.config.root())
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        let mut params = crate::transport::encode_sms_form(message);
        if !self.config.is_oauth() {
            params.push((
                ApiKey::FIELD.to_owned(),
                self.config.api_key().as_str().to_owned(),
            ));
            params.push((
                ApiSecret::FIELD.to_owned(),
                self.config.api_secret().as_str().to_owned(),
            ));
        }

        if self.config.is_verbose() {
            log::debug!("sending sms to {url}: {}", loggable_form(&params));
        }

        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(NexmoError::Transport)?;

        if self.config.is_verbose() {
            log::debug!("sms response status {}: {}", response.status, response.body);
        }

        if !(200..=299).contains(&response.status) {
            return Err(NexmoError::HttpStatus {
                status: response.status,
                body: non_empty_body(response.body),
            });
        }

        crate::transport::decode_message_json_response(&response.body)
            .map_err(|err| NexmoError::Parse(Box::new(err)))
    }
}

/// URL-encoded form with the secret masked.
fn loggable_form(params: &[(String, String)]) -> String {
    let masked = params.iter().map(|(key, value)| {
        let value = if key == ApiSecret::FIELD {
            "***"
        } else {
            value.as_str()
        };
        (key.as_str(), value)
    });
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(masked)
        .finish()
}

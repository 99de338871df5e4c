use url::Url;

use crate::config::ClientConfig;
use crate::domain::{NumberSearchOptions, NumberSearchResponse, ValidationError};

use super::{HttpResponse, HttpTransport, NexmoError, redact_url};

const COUNTRY_FIELD: &str = "country";
const MSISDN_FIELD: &str = "msisdn";

/// Number management resource, borrowed from [`super::NexmoClient::numbers`].
///
/// The provider expects the API key and secret as path segments on every call.
pub struct Numbers<'a> {
    config: &'a ClientConfig,
    http: &'a dyn HttpTransport,
}

impl<'a> Numbers<'a> {
    pub(super) fn new(config: &'a ClientConfig, http: &'a dyn HttpTransport) -> Self {
        Self { config, http }
    }

    /// Search for numbers available for purchase in `country` (ISO 3166-1 alpha-2).
    pub async fn search_available(
        &self,
        country: &str,
    ) -> Result<NumberSearchResponse, NexmoError> {
        self.search_available_with_options(country, &NumberSearchOptions::default())
            .await
    }

    /// Search with pattern filters.
    ///
    /// The filters are only sent when both `pattern` and `search_pattern` are set;
    /// otherwise the search is unfiltered. The HTTP status is not inspected: the
    /// body either decodes as a search result or the call fails with
    /// [`NexmoError::Parse`].
    pub async fn search_available_with_options(
        &self,
        country: &str,
        options: &NumberSearchOptions,
    ) -> Result<NumberSearchResponse, NexmoError> {
        require(COUNTRY_FIELD, country)?;

        let url = crate::transport::search_numbers_url(
            self.config.root(),
            self.config.api_key(),
            self.config.api_secret(),
            country,
            options,
        )
        .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        self.log_request("GET", &url);
        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(NexmoError::Transport)?;
        self.log_response(&response);

        crate::transport::decode_number_search_json_response(&response.body)
            .map_err(|err| NexmoError::Parse(Box::new(err)))
    }

    /// Buy `msisdn` in `country`.
    ///
    /// Returns `Ok(true)` on HTTP 200; 401 and 420 map to
    /// [`NexmoError::WrongCredentials`] and [`NexmoError::BadParameters`], any other
    /// status to [`NexmoError::OtherStatus`]. The body is ignored.
    pub async fn buy_phone_number(&self, country: &str, msisdn: &str) -> Result<bool, NexmoError> {
        require(COUNTRY_FIELD, country)?;
        require(MSISDN_FIELD, msisdn)?;

        let url = crate::transport::buy_number_url(
            self.config.root(),
            self.config.api_key(),
            self.config.api_secret(),
            country,
            msisdn,
        )
        .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        self.post_for_status(url).await
    }

    /// Cancel (release) `msisdn` in `country`. Same outcomes as
    /// [`Numbers::buy_phone_number`].
    pub async fn cancel_phone_number(
        &self,
        country: &str,
        msisdn: &str,
    ) -> Result<bool, NexmoError> {
        require(COUNTRY_FIELD, country)?;
        require(MSISDN_FIELD, msisdn)?;

        let url = crate::transport::cancel_number_url(
            self.config.root(),
            self.config.api_key(),
            self.config.api_secret(),
            country,
            msisdn,
        )
        .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        self.post_for_status(url).await
    }

    async fn post_for_status(&self, url: Url) -> Result<bool, NexmoError> {
        self.log_request("POST", &url);
        let response = self
            .http
            .post(url.as_str())
            .await
            .map_err(NexmoError::Transport)?;
        self.log_response(&response);

        status_outcome(response.status)
    }

    fn log_request(&self, method: &str, url: &Url) {
        if self.config.is_verbose() {
            log::debug!(
                "{method} {}",
                redact_url(url, self.config.api_secret())
            );
        }
    }

    fn log_response(&self, response: &HttpResponse) {
        if self.config.is_verbose() {
            log::debug!("number response status {}: {}", response.status, response.body);
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn status_outcome(status: u16) -> Result<bool, NexmoError> {
    match status {
        200 => Ok(true),
        401 => Err(NexmoError::WrongCredentials),
        420 => Err(NexmoError::BadParameters),
        status => Err(NexmoError::OtherStatus { status }),
    }
}

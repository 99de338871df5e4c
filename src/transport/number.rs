use serde::Deserialize;
use url::Url;

use super::{TransportError, endpoint_url};
use super::quoted::QuotedNumber;
use crate::domain::{
    ApiKey, ApiSecret, AvailableNumber, NumberSearchOptions, NumberSearchResponse,
};

#[derive(Debug, Clone, Deserialize)]
struct NumberSearchJsonResponse {
    count: QuotedNumber,
    #[serde(default)]
    numbers: Vec<AvailableNumberJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct AvailableNumberJson {
    country: String,
    msisdn: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<String>,
    cost: QuotedNumber,
}

/// `GET {root}/number/search/{key}/{secret}/{country}`, with both filters or none.
pub fn search_numbers_url(
    api_root: &Url,
    key: &ApiKey,
    secret: &ApiSecret,
    country: &str,
    options: &NumberSearchOptions,
) -> Result<Url, TransportError> {
    let mut url = endpoint_url(
        api_root,
        &["number", "search", key.as_str(), secret.as_str(), country],
    )?;
    if let Some((pattern, search_pattern)) = options.filters() {
        url.query_pairs_mut()
            .append_pair(NumberSearchOptions::PATTERN_FIELD, pattern)
            .append_pair(NumberSearchOptions::SEARCH_PATTERN_FIELD, search_pattern);
    }
    Ok(url)
}

pub fn buy_number_url(
    api_root: &Url,
    key: &ApiKey,
    secret: &ApiSecret,
    country: &str,
    msisdn: &str,
) -> Result<Url, TransportError> {
    endpoint_url(
        api_root,
        &["number", "buy", key.as_str(), secret.as_str(), country, msisdn],
    )
}

pub fn cancel_number_url(
    api_root: &Url,
    key: &ApiKey,
    secret: &ApiSecret,
    country: &str,
    msisdn: &str,
) -> Result<Url, TransportError> {
    endpoint_url(
        api_root,
        &["number", "cancel", key.as_str(), secret.as_str(), country, msisdn],
    )
}

pub fn decode_number_search_json_response(
    json: &str,
) -> Result<NumberSearchResponse, TransportError> {
    let parsed: NumberSearchJsonResponse = serde_json::from_str(json)?;

    let numbers = parsed
        .numbers
        .into_iter()
        .map(|number| {
            Ok(AvailableNumber {
                country: number.country,
                msisdn: number.msisdn,
                kind: number.kind,
                features: number.features,
                cost: number.cost.parse("cost")?,
            })
        })
        .collect::<Result<Vec<_>, TransportError>>()?;

    Ok(NumberSearchResponse {
        count: parsed.count.parse("count")?,
        numbers,
    })
}

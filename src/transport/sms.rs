use serde::Deserialize;
use url::Url;

use super::{TransportError, endpoint_url};
use super::quoted::QuotedNumber;
use crate::domain::{
    MessageClass, MessageReport, MessageResponse, MessageType, ResponseCode, SmsMessage,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct MessageJsonResponse {
    message_count: QuotedNumber,
    #[serde(default)]
    messages: Vec<MessageJsonReport>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct MessageJsonReport {
    status: QuotedNumber,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    client_ref: Option<String>,
    #[serde(default)]
    remaining_balance: Option<String>,
    #[serde(default)]
    message_price: Option<String>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default)]
    error_text: Option<String>,
}

/// `POST {root}/sms/json`.
pub fn sms_json_url(api_root: &Url) -> Result<Url, TransportError> {
    endpoint_url(api_root, &["sms", "json"])
}

/// Form fields for `sms/json`, without credentials.
pub fn encode_sms_form(message: &SmsMessage) -> Vec<(String, String)> {
    let mut params = vec![
        ("from".to_owned(), message.from.clone()),
        ("to".to_owned(), message.to.clone()),
        (
            MessageType::FIELD.to_owned(),
            message.kind.as_str().to_owned(),
        ),
    ];

    push_text(&mut params, "text", message.text.as_deref());
    if message.status_report_required {
        params.push(("status-report-req".to_owned(), "1".to_owned()));
    }
    push_text(&mut params, "client-ref", message.client_ref.as_deref());
    push_text(&mut params, "network-code", message.network_code.as_deref());
    push_text(&mut params, "vcard", message.vcard.as_deref());
    push_text(&mut params, "vcal", message.vcal.as_deref());
    push_millis(&mut params, "ttl", message.ttl);
    if let Some(class) = message.class {
        params.push((MessageClass::FIELD.to_owned(), class.code().to_string()));
    }
    if !message.body.is_empty() {
        params.push(("body".to_owned(), hex::encode(&message.body)));
    }
    if !message.udh.is_empty() {
        params.push(("udh".to_owned(), hex::encode(&message.udh)));
    }
    push_text(&mut params, "title", message.title.as_deref());
    push_text(&mut params, "url", message.url.as_deref());
    push_millis(&mut params, "validity", message.validity);

    params
}

fn push_text(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        params.push((key.to_owned(), value.to_owned()));
    }
}

fn push_millis(params: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|value| *value != 0) {
        params.push((key.to_owned(), value.to_string()));
    }
}

pub fn decode_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;

    let messages = parsed
        .messages
        .into_iter()
        .map(|report| {
            Ok(MessageReport {
                status: ResponseCode::new(report.status.parse("status")?),
                message_id: report.message_id,
                to: report.to,
                client_ref: report.client_ref,
                remaining_balance: report.remaining_balance,
                message_price: report.message_price,
                network: report.network,
                error_text: report.error_text,
            })
        })
        .collect::<Result<Vec<_>, TransportError>>()?;

    Ok(MessageResponse {
        message_count: parsed.message_count.parse("message-count")?,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::KnownResponseCode;

    use super::*;

    fn keys(params: &[(String, String)]) -> Vec<&str> {
        params.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn sms_url_appends_endpoint_path() {
        let root = Url::parse("https://rest.nexmo.com").unwrap();
        assert_eq!(
            sms_json_url(&root).unwrap().as_str(),
            "https://rest.nexmo.com/sms/json"
        );
    }

    #[test]
    fn encode_required_fields_only() {
        let msg = SmsMessage {
            from: "Acme".to_owned(),
            to: "447700900123".to_owned(),
            ..Default::default()
        };
        let params = encode_sms_form(&msg);

        assert_eq!(
            params,
            vec![
                ("from".to_owned(), "Acme".to_owned()),
                ("to".to_owned(), "447700900123".to_owned()),
                ("type".to_owned(), "text".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_omits_empty_and_zero_optionals() {
        let msg = SmsMessage {
            text: Some(String::new()),
            client_ref: Some(String::new()),
            network_code: Some(String::new()),
            vcard: Some(String::new()),
            vcal: Some(String::new()),
            ttl: Some(0),
            title: Some(String::new()),
            url: Some(String::new()),
            validity: Some(0),
            ..SmsMessage::text("Acme", "447700900123", "")
        };
        let params = encode_sms_form(&msg);

        assert_eq!(keys(&params), vec!["from", "to", "type"]);
    }

    #[test]
    fn encode_includes_every_non_empty_optional() {
        let msg = SmsMessage {
            from: "Acme".to_owned(),
            to: "447700900123".to_owned(),
            kind: MessageType::Binary,
            text: Some("hello".to_owned()),
            status_report_required: true,
            client_ref: Some("order-17".to_owned()),
            network_code: Some("23410".to_owned()),
            vcard: Some("BEGIN:VCARD".to_owned()),
            vcal: Some("BEGIN:VCALENDAR".to_owned()),
            ttl: Some(60_000),
            class: Some(MessageClass::Flash),
            body: vec![0xde, 0xad],
            udh: vec![0x06, 0x05],
            title: Some("Offer".to_owned()),
            url: Some("https://example.com".to_owned()),
            validity: Some(86_400_000),
        };
        let params = encode_sms_form(&msg);

        assert_eq!(
            params,
            vec![
                ("from".to_owned(), "Acme".to_owned()),
                ("to".to_owned(), "447700900123".to_owned()),
                ("type".to_owned(), "binary".to_owned()),
                ("text".to_owned(), "hello".to_owned()),
                ("status-report-req".to_owned(), "1".to_owned()),
                ("client-ref".to_owned(), "order-17".to_owned()),
                ("network-code".to_owned(), "23410".to_owned()),
                ("vcard".to_owned(), "BEGIN:VCARD".to_owned()),
                ("vcal".to_owned(), "BEGIN:VCALENDAR".to_owned()),
                ("ttl".to_owned(), "60000".to_owned()),
                ("message-class".to_owned(), "0".to_owned()),
                ("body".to_owned(), "dead".to_owned()),
                ("udh".to_owned(), "0605".to_owned()),
                ("title".to_owned(), "Offer".to_owned()),
                ("url".to_owned(), "https://example.com".to_owned()),
                ("validity".to_owned(), "86400000".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_keeps_report_order_and_quoted_numbers() {
        let json = r#"
        {
          "message-count": "3",
          "messages": [
            {
              "status": "0",
              "message-id": "0A0000000123ABCD1",
              "to": "447700900123",
              "client-ref": "order-17",
              "remaining-balance": "3.14159265",
              "message-price": "0.03330000",
              "network": "23410"
            },
            {
              "status": "0",
              "message-id": "0A0000000123ABCD2",
              "to": "447700900123"
            },
            {
              "status": "1",
              "error-text": "Throttled"
            }
          ]
        }
        "#;

        let resp = decode_message_json_response(json).unwrap();
        assert_eq!(resp.message_count, 3);
        assert_eq!(resp.messages.len(), 3);

        let first = &resp.messages[0];
        assert!(first.status.is_success());
        assert_eq!(first.message_id.as_deref(), Some("0A0000000123ABCD1"));
        assert_eq!(first.client_ref.as_deref(), Some("order-17"));
        assert_eq!(first.remaining_balance.as_deref(), Some("3.14159265"));
        assert_eq!(first.message_price.as_deref(), Some("0.03330000"));
        assert_eq!(first.network.as_deref(), Some("23410"));

        assert_eq!(
            resp.messages[1].message_id.as_deref(),
            Some("0A0000000123ABCD2")
        );

        let last = &resp.messages[2];
        assert_eq!(last.status.known(), Some(KnownResponseCode::Throttled));
        assert_eq!(last.message_id, None);
        assert_eq!(last.error_text.as_deref(), Some("Throttled"));
    }

    #[test]
    fn decode_rejects_non_numeric_status() {
        let json = r#"{"message-count": "1", "messages": [{"status": "ok"}]}"#;
        let err = decode_message_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidNumber { field: "status", .. }
        ));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_message_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}

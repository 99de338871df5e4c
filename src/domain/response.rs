use crate::domain::value::ResponseCode;

#[derive(Debug, Clone, PartialEq)]
/// Result of `sms/json`: one report per message segment sent.
pub struct MessageResponse {
    pub message_count: u32,
    pub messages: Vec<MessageReport>,
}

impl MessageResponse {
    /// `true` when every segment was accepted.
    pub fn all_succeeded(&self) -> bool {
        self.messages.iter().all(|report| report.status.is_success())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReport {
    pub status: ResponseCode,
    pub message_id: Option<String>,
    pub to: Option<String>,
    pub client_ref: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of `number/search`.
pub struct NumberSearchResponse {
    pub count: u64,
    pub numbers: Vec<AvailableNumber>,
}

#[derive(Debug, Clone, PartialEq)]
/// A phone number available for purchase.
pub struct AvailableNumber {
    pub country: String,
    pub msisdn: String,
    pub kind: String,
    pub features: Vec<String>,
    pub cost: f64,
}

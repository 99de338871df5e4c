use std::io;

use nexmo::{NexmoClient, SmsMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = std::env::var("NEXMO_FROM").unwrap_or_else(|_| "Nexmo".to_owned());
    let to = std::env::var("NEXMO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NEXMO_TO environment variable is required",
        )
    })?;
    let text = std::env::var("NEXMO_TEXT")
        .unwrap_or_else(|_| "Hello from the nexmo demo.".to_owned());

    let client = NexmoClient::from_env()?;
    let mut message = SmsMessage::text(from, to, text);
    message.client_ref = Some("nexmo-demo".to_owned());

    let response = client.sms().send(&message).await?;
    println!("message-count: {}", response.message_count);
    for report in &response.messages {
        println!(
            "status: {} ({}), id: {:?}, price: {:?}, balance: {:?}, error: {:?}",
            report.status,
            report.status.as_u32(),
            report.message_id,
            report.message_price,
            report.remaining_balance,
            report.error_text
        );
    }

    Ok(())
}

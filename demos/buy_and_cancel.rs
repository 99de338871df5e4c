use std::time::Duration;

use nexmo::NexmoClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let country = std::env::var("NEXMO_COUNTRY").unwrap_or_else(|_| "US".to_owned());

    let client = NexmoClient::from_env()?;
    let numbers = client.numbers();

    let available = numbers.search_available(&country).await?;
    let Some(first) = available.numbers.first() else {
        println!("no numbers available in {country}");
        return Ok(());
    };
    println!("buying (and then cancelling) {}", first.msisdn);

    // The provider rejects calls made in quick succession.
    tokio::time::sleep(Duration::from_secs(1)).await;
    let bought = numbers.buy_phone_number(&country, &first.msisdn).await?;
    println!("bought: {bought}");

    tokio::time::sleep(Duration::from_secs(1)).await;
    let cancelled = numbers.cancel_phone_number(&country, &first.msisdn).await?;
    println!("cancelled: {cancelled}");

    Ok(())
}

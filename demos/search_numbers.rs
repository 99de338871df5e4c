use nexmo::{NexmoClient, NumberSearchOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let country = std::env::var("NEXMO_COUNTRY").unwrap_or_else(|_| "US".to_owned());
    let pattern = std::env::var("NEXMO_PATTERN").ok();

    let client = NexmoClient::from_env()?;
    let numbers = client.numbers();
    let response = match pattern {
        // search_pattern 1: the pattern may appear anywhere in the number.
        Some(pattern) => {
            numbers
                .search_available_with_options(&country, &NumberSearchOptions::new(pattern, "1"))
                .await?
        }
        None => numbers.search_available(&country).await?,
    };

    println!("count: {}", response.count);
    for number in &response.numbers {
        println!(
            "{} {} {} [{}] {:.2}",
            number.country,
            number.msisdn,
            number.kind,
            number.features.join(","),
            number.cost
        );
    }

    Ok(())
}

/*
[INPUT]:  RINGLINE_API_KEY env var, search filters
[OUTPUT]: Purchasable inventory and the account's owned numbers
[POS]:    Examples - number search and inventory listing
[UPDATE]: When search filters change
*/

use futures_util::TryStreamExt;
use ringline_sdk::*;

/// Example: Search purchasable numbers, then walk the owned inventory
///
/// Requires RINGLINE_API_KEY in the environment.
#[tokio::main]
async fn main() {
    println!("=== Ringline Number Search Example ===\n");

    let client = match RinglineClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let search = AvailableNumberSearchParams {
        filter_country_code: Some("US".to_string()),
        filter_features: vec![PhoneNumberFeature::Sms, PhoneNumberFeature::Voice],
        filter_locality: Some("Chicago".to_string()),
        filter_limit: Some(5),
        ..AvailableNumberSearchParams::default()
    };

    println!("Searching available numbers in Chicago...");
    match client.search_available_numbers(&search).await {
        Ok(page) => {
            println!("✓ {} result(s):", page.meta.total_results);
            for number in &page.data {
                let monthly = number
                    .cost_information
                    .as_ref()
                    .map(|c| format!("{} {}/mo", c.monthly_cost, c.currency))
                    .unwrap_or_else(|| "price unknown".to_string());
                println!("  {} ({})", number.phone_number, monthly);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nWalking owned numbers (all pages)...");
    let owned: Vec<PhoneNumber> = match client
        .list_phone_numbers_stream(PhoneNumberListParams::default())
        .try_collect()
        .await
    {
        Ok(numbers) => numbers,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Account owns {} number(s)", owned.len());
    for number in owned.iter().take(10) {
        println!("  {} {:?}", number.phone_number, number.status);
    }

    println!("\n✓ Number search example complete");
}

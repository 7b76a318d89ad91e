/*
[INPUT]:  RINGLINE_API_KEY env var, destination number
[OUTPUT]: Sent message record printed to stdout
[POS]:    Examples - outbound SMS
[UPDATE]: When messaging parameters change
*/

use ringline_sdk::*;

/// Example: Send an SMS and poll its delivery state
///
/// Requires RINGLINE_API_KEY in the environment.
#[tokio::main]
async fn main() {
    println!("=== Ringline Send Message Example ===\n");

    let client = match RinglineClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let params = MessageSendParams {
        from: Some("+15550001111".to_string()),
        text: Some("Your appointment is confirmed for tomorrow at 10am.".to_string()),
        ..MessageSendParams::new("+15550002222")
    };

    println!("Sending SMS to {}...", params.to);
    let message = match client.send_message(&params).await {
        Ok(m) => m,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Message accepted: id={} parts={:?}", message.id, message.parts);
    if let Some(cost) = &message.cost {
        println!("  Cost: {} {}", cost.amount, cost.currency);
    }

    // Fetch the record again to see updated delivery state
    println!("\nRetrieving message {}...", message.id);
    match client.retrieve_message(&message.id).await {
        Ok(m) => {
            for delivery in &m.to {
                println!("✓ {} -> {:?}", delivery.phone_number, delivery.status);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Send message example complete");
}

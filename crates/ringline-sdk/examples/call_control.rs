/*
[INPUT]:  RINGLINE_API_KEY env var, connection id, destination number
[OUTPUT]: Outbound call dialed, spoken to, and hung up
[POS]:    Examples - call command sequence
[UPDATE]: When call commands change
*/

use ringline_sdk::*;

/// Example: Dial an outbound call, speak a message, then hang up
///
/// Requires RINGLINE_API_KEY in the environment.
#[tokio::main]
async fn main() {
    println!("=== Ringline Call Control Example ===\n");

    let client = match RinglineClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let params = DialParams {
        from_display_name: Some("Ringline Demo".to_string()),
        timeout_secs: Some(30),
        ..DialParams::new("+15550002222", "+15550001111", "conn-demo-1")
    };

    println!("Dialing {}...", params.to);
    let call = match client.dial(&params).await {
        Ok(c) => c,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Call queued: {}", call.call_control_id);

    // Commands are acknowledged immediately; progress arrives via webhooks.
    let speak = SpeakParams::new(
        "Hello! This is a test call from the Ringline SDK.",
        "female",
    );
    println!("\nSpeaking on {}...", call.call_control_id);
    match client.speak_text(&call.call_control_id, &speak).await {
        Ok(ack) => println!("✓ Speak accepted: {}", ack.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nHanging up {}...", call.call_control_id);
    match client
        .hangup_call(&call.call_control_id, &HangupParams::default())
        .await
    {
        Ok(ack) => println!("✓ Hangup accepted: {}", ack.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Call control example complete");
}

/*
[INPUT]:  RINGLINE_API_KEY env var, an answered call leg
[OUTPUT]: Conference created, second leg joined, roster printed
[POS]:    Examples - conference room lifecycle
[UPDATE]: When conference commands change
*/

use ringline_sdk::*;

/// Example: Create a conference, join a second leg, inspect the roster
///
/// Requires RINGLINE_API_KEY in the environment and two answered call
/// legs (their call_control_ids are hard-coded placeholders here).
#[tokio::main]
async fn main() {
    println!("=== Ringline Conference Example ===\n");

    let client = match RinglineClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let first_leg = "v3:first-leg";
    let second_leg = "v3:second-leg";

    let params = ConferenceCreateParams {
        beep_enabled: Some(BeepMode::OnEnter),
        max_participants: Some(10),
        ..ConferenceCreateParams::new(first_leg, "sdk-demo-room")
    };

    println!("Creating conference from {}...", first_leg);
    let conference = match client.create_conference(&params).await {
        Ok(c) => c,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Conference {} ({:?})", conference.id, conference.status);

    println!("\nJoining {}...", second_leg);
    let join = JoinParams {
        start_conference_on_enter: Some(true),
        ..JoinParams::new(second_leg)
    };
    match client.join_conference(&conference.id, &join).await {
        Ok(ack) => println!("✓ Join accepted: {}", ack.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing participants...");
    match client
        .list_participants(&conference.id, &ParticipantListParams::default())
        .await
    {
        Ok(page) => {
            println!("✓ {} participant(s):", page.meta.total_results);
            for participant in &page.data {
                println!(
                    "  {} {:?} muted={}",
                    participant.call_control_id, participant.status, participant.muted
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Mute everyone except the moderator leg
    println!("\nMuting {}...", second_leg);
    let mute = MuteParams {
        call_control_ids: vec![second_leg.to_string()],
    };
    match client.mute_participants(&conference.id, &mute).await {
        Ok(ack) => println!("✓ Mute accepted: {}", ack.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Conference example complete");
}

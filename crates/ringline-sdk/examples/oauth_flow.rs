/*
[INPUT]:  RINGLINE_CLIENT_ID / RINGLINE_CLIENT_SECRET env vars
[OUTPUT]: Minted access token described via the introspection endpoint
[POS]:    Examples - OAuth client-credentials lifecycle
[UPDATE]: When grant flows change
*/

use ringline_sdk::*;

/// Example: Mint an access token and call the API with it
///
/// Requires RINGLINE_CLIENT_ID and RINGLINE_CLIENT_SECRET in the
/// environment (RINGLINE_API_KEY is not used once a token is minted).
#[tokio::main]
async fn main() {
    println!("=== Ringline OAuth Example ===\n");

    let client_id = match std::env::var("RINGLINE_CLIENT_ID") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("RINGLINE_CLIENT_ID is not set");
            return;
        }
    };
    let client_secret = match std::env::var("RINGLINE_CLIENT_SECRET") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("RINGLINE_CLIENT_SECRET is not set");
            return;
        }
    };

    // The manager only needs a client for transport; the API key is unused.
    let client = match RinglineClient::new("unused") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let config = OAuthConfig {
        scope: Some("messages:send calls:write".to_string()),
        ..OAuthConfig::new(client_id, client_secret)
    };
    let manager = OAuthManager::new(client, config);

    println!("Requesting client-credentials grant...");
    match manager.authenticate().await {
        Ok(grant) => {
            println!("✓ Token minted, expires in {}s", grant.expires_in);
            if let Some(scope) = &grant.scope {
                println!("  Granted scope: {}", scope);
            }
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    println!("\nDescribing the minted token...");
    let authorized = match manager.authorized_client().await {
        Ok(c) => c,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    match authorized.describe_token().await {
        Ok(info) => {
            println!("✓ active={} client_id={:?}", info.active, info.client_id);
            println!("  exp={:?} scope={:?}", info.exp, info.scope);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ OAuth example complete");
}

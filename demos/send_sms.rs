use std::io;
use std::time::Duration;

use raven_client::RavenClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("raven_client=debug,warn")),
        )
        .init();

    let base_url = std::env::var("RAVEN_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "RAVEN_URL environment variable is required",
        )
    })?;
    let token = std::env::var("RAVEN_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "RAVEN_TOKEN environment variable is required",
        )
    })?;
    let phone = std::env::var("RAVEN_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "RAVEN_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("RAVEN_TEXT")
        .unwrap_or_else(|_| "Hello from the raven-client demo.".to_owned());

    let client = RavenClient::builder(base_url, token)
        .timeout(Duration::from_secs(30))
        .build()?;
    let id = client.send_sms(phone, text).await?;
    println!("message id: {id}");

    Ok(())
}

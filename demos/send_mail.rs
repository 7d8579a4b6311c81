use std::io;

use raven_client::RavenClient;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("raven_client=debug,warn")),
        )
        .init();

    let base_url = required_env("RAVEN_URL")?;
    let token = required_env("RAVEN_TOKEN")?;
    let recipient = required_env("RAVEN_RECIPIENT")?;
    let from = required_env("RAVEN_FROM")?;
    let subject =
        std::env::var("RAVEN_SUBJECT").unwrap_or_else(|_| "Hello from raven-client".to_owned());
    let body = std::env::var("RAVEN_BODY")
        .unwrap_or_else(|_| "Hello from the raven-client demo.".to_owned());

    let client = RavenClient::new(base_url, token);
    let id = client.send_mail(recipient, from, subject, body).await?;
    println!("message id: {id}");

    Ok(())
}

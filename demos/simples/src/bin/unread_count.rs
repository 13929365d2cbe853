use ent_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Logging in...");
    let client = Client::new(Config::new()).await?;

    let account = client.account().user().await?;
    let unread = client.mail().unread_count().await?;
    info!(
        "{} has {} unread mails",
        account.name.unwrap_or(account.id),
        unread
    );

    Ok(())
}

use ent_client::prelude::*;
use prettytable::{Table, row};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new()).await?;
    let mail = client.mail();

    let folders = mail.get_folders().await?;
    for folder in &folders {
        info!("{} ({} unread)", folder.path, folder.unread);
    }

    let mails = mail.get_mails(None, false, 20).await?;
    let mut table = Table::new();
    table.add_row(row!["Date", "From", "Subject", "Unread"]);
    for entry in &mails {
        let sender = entry
            .recipients
            .sender
            .as_ref()
            .map(|user| user.name.clone().unwrap_or_else(|| user.id.clone()))
            .unwrap_or_default();
        table.add_row(row![
            entry
                .date
                .map(|date| date.format("%d/%m/%Y %H:%M").to_string())
                .unwrap_or_default(),
            sender,
            entry.subject.as_deref().unwrap_or(""),
            if entry.unread { "*" } else { "" }
        ]);
    }
    table.printstd();

    Ok(())
}

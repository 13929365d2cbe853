use ent_client::prelude::*;
use std::env;

// Usage: rack_deposit <file> <search>
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let (Some(file), Some(search)) = (args.next(), args.next()) else {
        error!("usage: rack_deposit <file> <search>");
        return Ok(());
    };

    let client = Client::new(Config::new()).await?;
    let users = client
        .userbase()
        .search_users(&SearchFilter::query(search))
        .await?;
    if users.is_empty() {
        warn!("Nobody matches the search");
        return Ok(());
    }

    client.rack().deposit(&users, &file).await?;
    info!("Deposited {} for {} users", file, users.len());

    for item in client.rack().get_rack().await? {
        info!("{:?} from {:?}", item.name, item.sender.name);
    }

    Ok(())
}

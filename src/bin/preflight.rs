use driver_service::{AppConfig, DriverStore, SqliteDriverStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars (or a .env file):\n\
           DATABASE_URL, BASIC_AUTH_USERNAME, BASIC_AUTH_PASSWORD\n\
         Optional:\n\
           DATABASE_MAX_CONNECTIONS (default 5), LISTEN_ADDR (default 0.0.0.0:3000)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = AppConfig::from_env()?;

    println!("> Preflight:");
    println!("  DATABASE_URL={}", config.database.url);
    println!("  DATABASE_MAX_CONNECTIONS={}", config.database.max_connections);
    println!("  BASIC_AUTH_USERNAME={}", config.basic_auth.username);
    println!("  LISTEN_ADDR={}", config.listen_addr);

    let store = SqliteDriverStore::connect(&config.database).await?;
    store.ping().await?;
    let drivers = store.list_all().await?;
    println!("  Database reachable, Drivers table present ({} rows)", drivers.len());

    println!("> Preflight OK");
    Ok(())
}

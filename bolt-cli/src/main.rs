use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use bolt_core::{Database, TwitchConfig, TwitchLookup};
use bolt_common::models::{StreamEntry, TwitchAccount};

#[derive(Parser, Debug, Clone)]
#[command(name = "bolt")]
#[command(author, version, about = "Bolt - cached Twitch account and stream lookups")]
struct Args {
    /// SQLite URL of the account store.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://data/api.db")]
    database_url: String,

    /// Log at debug level regardless of RUST_LOG.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Show the stored account for a login name.
    User { name: String },
    /// Show whether a login name is live right now.
    Stream { name: String },
    /// Exit 0 if the account exists, 1 otherwise.
    Exists { name: String },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = TwitchConfig::from_env()?;
    let db = Database::new(&args.database_url).await?;
    db.migrate().await?;
    let lookup = TwitchLookup::connect(&config, &db);

    match args.command {
        Command::User { name } => match lookup.get_account(&name).await {
            Ok(account) => print_account(&account),
            Err(e) if e.is_not_found() => {
                error!("No Twitch user named `{}`.", name);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Command::Stream { name } => match lookup.get_stream(&name).await {
            Ok(Some(entry)) => print_stream(&name, &entry),
            Ok(None) => println!("{} is offline.", name),
            Err(e) if e.is_not_found() => {
                error!("No Twitch user named `{}`.", name);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Command::Exists { name } => {
            let exists = lookup.account_exists(&name).await?;
            info!("{} exists: {}", name, exists);
            if !exists {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_account(account: &TwitchAccount) {
    println!("{} ({})", account.display_name, account.user_id);
    println!("  type:       {}", account.account_type);
    println!("  created:    {}", account.created_at);
    println!("  updated:    {}", account.api_updated_at);
    if let Some(bio) = &account.bio {
        println!("  bio:        {}", bio);
    }
    if let Some(logo) = &account.profile_image_url {
        println!("  logo:       {}", logo);
    }
    println!("  refreshed:  {}", account.last_refreshed);
}

fn print_stream(name: &str, entry: &StreamEntry) {
    println!("{} is live with {} viewers", name, entry.viewer_count);
    if let Some(title) = &entry.title {
        println!("  title:   {}", title);
    }
    if let Some(game) = &entry.game {
        println!("  game:    {}", game);
    }
    if let Some(started_at) = entry.started_at {
        println!("  since:   {}", started_at);
    }
    if let Some(preview) = entry.raw.pointer("/preview/medium").and_then(|v| v.as_str()) {
        println!("  preview: {}", preview);
    }
}

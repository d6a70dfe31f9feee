use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use portfolio::api::{self, Config};
use portfolio::db::{Database, SqliteDatabase};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Personal portfolio web server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "projects.db")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The store location is injected exactly once, here; every operation
    // afterwards goes through the opened handle.
    let db = SqliteDatabase::open(&cli.database).await?;
    db.init_schema().await?;

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await
    .map_err(|e| miette::miette!("server error: {e}"))?;

    Ok(())
}

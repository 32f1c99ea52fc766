use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use mizan::cli::seeder::{clear_lookups, seed_lookups};

#[derive(Parser)]
#[command(name = "mizan-cli")]
#[command(about = "Mizan CLI - Administrative tools for the accreditation backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the starter lookup vocabularies (locations and classifications)
    SeedLookups,
    /// Remove all lookup rows (fresh environments only)
    ClearLookups,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::SeedLookups => seed_lookups(&pool).await,
        Commands::ClearLookups => clear_lookups(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

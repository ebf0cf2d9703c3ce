use std::{process::ExitCode, time::Duration};

use bg_ratings::{
    args::{Args, Command},
    database::{cached_store::CachedStore, db::DbClient},
    error::{Error, Result},
    model::structures::entity_key::EntityKey,
    service::{views::PlacementView, RatingService}
};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if e.is_source_unavailable() {
                error!("The snapshot store could not be read, try again later");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    let calendar = args.calendar();
    let now = Utc::now().with_timezone(&calendar.timezone());

    match &args.command {
        Command::Placements { ratings } => to_json(&PlacementView::from_ratings(ratings)),
        Command::History {
            player,
            region,
            mode,
            period,
            offset
        } => {
            let service = service(&args).await?;
            let key = EntityKey::new(player.as_str(), *region, *mode);
            let history = service.history(&key, *period, *offset, &now).await?;

            if history.is_empty() {
                info!(player = %key.player, region = %key.region, "No rating history for this period");
            }

            to_json(&history)
        }
        Command::Leaderboard {
            mode,
            regions,
            period,
            offset
        } => {
            let service = service(&args).await?;
            let leaderboard = service.leaderboard(*mode, regions, *period, *offset, &now).await?;

            to_json(&leaderboard)
        }
    }
}

async fn service(args: &Args) -> Result<RatingService<CachedStore<DbClient>>> {
    let connection_string = args
        .connection_string
        .as_deref()
        .ok_or_else(|| Error::InvalidArgument("CONNECTION_STRING environment variable must be set".to_string()))?;

    let client = DbClient::connect(connection_string).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        error!("Application cannot start without a valid database connection");
        e
    })?;

    let store = CachedStore::new(client, Duration::from_secs(args.cache_ttl_secs));
    Ok(RatingService::new(store, args.calendar(), args.leaderboard_size))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

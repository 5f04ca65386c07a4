//! Socialize development server
//!
//! Runs an in-memory copy of the Socialize REST API for local development.
//!
//! Usage:
//!   socialize-devserver --port 8080 --user dev-token:1

use anyhow::{Context, Result, bail};
use clap::Parser;
use socialize_devserver::{DevStore, build_router};
use socialize_types::User;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "socialize-devserver")]
#[command(about = "In-memory Socialize REST service for local development")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Accepted access tokens as TOKEN:USER_ID (repeatable)
    #[arg(short, long = "user", default_value = "dev-token:1")]
    users: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_user(entry: &str) -> Result<(String, User)> {
    let Some((token, id)) = entry.split_once(':') else {
        bail!("expected TOKEN:USER_ID, got {entry:?}");
    };
    let id: i64 = id
        .parse()
        .with_context(|| format!("invalid user id in {entry:?}"))?;
    Ok((token.to_string(), User::new(id)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let addr = format!("{}:{}", args.host, args.port);
    let mut store = DevStore::new(format!("http://{addr}"));
    for entry in &args.users {
        let (token, user) = parse_user(entry)?;
        info!("Accepting token {} as user {}", token, user.id);
        store.register_user(token, user);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Socialize devserver listening on http://{}/v1", addr);
    axum::serve(listener, build_router(store.into_shared()))
        .await
        .context("HTTP server failed")
}

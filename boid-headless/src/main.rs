use anyhow::{Context, Result};
use boid_headless::{run, Args};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Boid runner starting...");
    log::info!("Mode: {:?}", args.mode);
    log::info!("Canvas: {}x{} at {} fps", args.width, args.height, args.fps);

    let status = run(&args).await.context("Runner error")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&status).context("Failed to encode status")?
    );

    Ok(())
}

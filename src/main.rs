use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::env;
use std::fs::File;
use swipesnek::{app, consts, Config};

fn main() -> Result<()> {
    let level = if env::var_os(consts::DEBUG_ENV_VAR).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(
        level,
        simplelog::Config::default(),
        File::create(consts::LOG_FILE).context("failed to create log file")?,
    )
    .context("failed to initialize logger")?;

    info!("Starting swipesnek");
    let score = app::run(Config::new())?;
    info!("Exiting");

    println!("\nGame Over! Final score: {score}");
    Ok(())
}

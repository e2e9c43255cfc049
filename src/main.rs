//! farm-advisor: interactive console for the advisory engine.
//!
//! Reads commands from stdin, prints command results to stdout and every
//! published UI update as a JSON line. Logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use farm_advisor::adapters::console::{self, Command, HELP};
use farm_advisor::adapters::{
    alert_table, diagnosis_table, source_for, voice_table, weather_table, ChannelUpdateSink,
    LoggingSpeechOutput, TableOracle,
};
use farm_advisor::application::{AppContext, Collaborators};
use farm_advisor::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting farm-advisor");

    let (sink, mut updates) = ChannelUpdateSink::new();
    let collaborators = Collaborators {
        dataset: source_for(&config.dataset),
        diagnosis: Arc::new(TableOracle::new(diagnosis_table())),
        voice: Arc::new(TableOracle::new(voice_table())),
        weather: Arc::new(TableOracle::new(weather_table())),
        alerts: Arc::new(TableOracle::new(alert_table())),
        speech: Arc::new(LoggingSpeechOutput),
        sink: Arc::new(sink),
    };
    let ctx = AppContext::create(config, collaborators).await?;

    let printer = tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            match serde_json::to_string(&update) {
                Ok(line) => println!("» {}", line),
                Err(err) => warn!(kind = update.kind(), error = %err, "Cannot encode update"),
            }
        }
    });

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match console::execute(&ctx, command).await {
                Ok(output) => println!("{}", output),
                Err(err) => println!("error: {}", err),
            },
            Err(err) => println!("{}", err),
        }
    }

    ctx.teardown().await;
    printer.abort();
    info!("farm-advisor stopped");
    Ok(())
}

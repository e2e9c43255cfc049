//! Executes console commands against the application context.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::AppContext;
use crate::domain::diagnosis::FileCapture;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::knowledge::CropPanel;
use crate::domain::navigation::ModuleChange;

use super::command::{Command, VoiceAction, HELP};

/// Runs one command and returns the text to print. `Quit` is left to the
/// caller's input loop.
pub async fn execute(ctx: &AppContext, command: Command) -> Result<String, DomainError> {
    let output = match command {
        Command::States => ctx
            .states()
            .iter()
            .map(|state| format!("{:<16} {}", state.id, state.name))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Districts { state } => {
            let districts = ctx.districts(&state);
            if districts.is_empty() {
                format!("no districts for '{}'", state)
            } else {
                districts
                    .iter()
                    .map(|district| format!("{:<16} {}", district.id, district.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Setup { state, district } => {
            let display = ctx.complete_setup(&state, &district)?;
            format!("📍 {}", display.label())
        }
        Command::District { district } => {
            let display = ctx.change_district(&district)?;
            format!("📍 {}", display.label())
        }
        Command::Open { module } => match ctx.select_module(&module)? {
            ModuleChange::Changed { to, .. } | ModuleChange::Unchanged(to) => {
                format!("showing {}", to)
            }
            ModuleChange::Ignored => format!("no module named '{}'", module),
        },
        Command::Back => {
            ctx.return_to_dashboard()?;
            "showing dashboard".to_string()
        }
        Command::Settings => {
            ctx.reopen_setup();
            "location setup reopened".to_string()
        }
        Command::Crop { crop_id } => render_crop(&ctx.select_crop(&crop_id)?),
        Command::Prices => {
            let board = ctx.price_board();
            let mut out = board.title.clone();
            for row in &board.rows {
                let _ = write!(
                    out,
                    "\n{:<8} {:<8} {:>10}  {} ({})",
                    row.crop_id,
                    row.local_name,
                    row.price,
                    row.change,
                    row.trend.as_class()
                );
            }
            out
        }
        Command::Camera => {
            let id = ctx.capture_photo()?;
            format!("capture {} processing", id)
        }
        Command::Upload { path } => {
            let file = match path {
                Some(path) => Some(read_capture(&path).await?),
                None => None,
            };
            let id = ctx.upload_image(file)?;
            format!("capture {} processing", id)
        }
        Command::Voice(action) => match action {
            VoiceAction::Open => {
                ctx.open_voice();
                "voice assistant ready".to_string()
            }
            VoiceAction::Start => match ctx.start_voice() {
                Some(_) => "listening...".to_string(),
                None => "already listening".to_string(),
            },
            VoiceAction::Stop => {
                if ctx.stop_voice() {
                    "stopped".to_string()
                } else {
                    "not listening".to_string()
                }
            }
            VoiceAction::Close => {
                ctx.close_voice();
                "voice assistant closed".to_string()
            }
        },
        Command::Language { code } => {
            let language = ctx.set_language(&code)?;
            format!("language: {}", language)
        }
        Command::Snapshot => serde_json::to_string_pretty(&ctx.snapshot()).map_err(|err| {
            DomainError::new(ErrorCode::InternalError, format!("Snapshot encoding failed: {}", err))
        })?,
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output)
}

fn render_crop(panel: &CropPanel) -> String {
    match panel {
        CropPanel::NoData { crop_id } => format!("No data available for '{}'", crop_id),
        CropPanel::Details(view) => {
            let mut out = format!("{} ({})", view.crop_id, view.local_name);
            let _ = write!(
                out,
                "\n  season: {}\n  sowing: {}\n  harvest: {}\n  soil: {}\n  water: {}\n  price: {} {} ({})",
                view.season,
                view.sowing,
                view.harvest,
                view.soil,
                view.water_requirement,
                view.price,
                view.price_change,
                view.trend.as_class()
            );
            for line in &view.fertilizer {
                let _ = write!(out, "\n  {}", line);
            }
            out
        }
    }
}

async fn read_capture(path: &Path) -> Result<FileCapture, DomainError> {
    let payload = tokio::fs::read(path).await.map_err(|err| {
        DomainError::validation("file", format!("Cannot read '{}': {}", path.display(), err))
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileCapture::new(name, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        alert_table, diagnosis_table, voice_table, weather_table, InMemoryUpdateSink,
        LoggingSpeechOutput, TableOracle, UnconfiguredSource,
    };
    use crate::application::Collaborators;
    use crate::config::AppConfig;
    use std::io::Write;
    use std::sync::Arc;

    async fn context() -> AppContext {
        let collaborators = Collaborators {
            dataset: Arc::new(UnconfiguredSource),
            diagnosis: Arc::new(TableOracle::seeded(diagnosis_table(), 7)),
            voice: Arc::new(TableOracle::seeded(voice_table(), 7)),
            weather: Arc::new(TableOracle::seeded(weather_table(), 7)),
            alerts: Arc::new(TableOracle::seeded(alert_table(), 7)),
            speech: Arc::new(LoggingSpeechOutput),
            sink: Arc::new(InMemoryUpdateSink::new()),
        };
        AppContext::create(AppConfig::default(), collaborators)
            .await
            .unwrap()
    }

    async fn run(ctx: &AppContext, line: &str) -> Result<String, DomainError> {
        execute(ctx, line.parse().unwrap()).await
    }

    #[tokio::test(start_paused = true)]
    async fn setup_then_browse_crop() {
        let ctx = context().await;

        assert_eq!(run(&ctx, "setup punjab").await.unwrap(), "📍 Main Area, Punjab");
        assert_eq!(run(&ctx, "open crops").await.unwrap(), "showing crops");

        let crop = run(&ctx, "crop wheat").await.unwrap();
        assert!(crop.contains("season: Rabi"));
        assert!(crop.contains("₹2,150/quintal +2.5% (positive)"));
        assert!(crop.contains("Nitrogen: 120 kg/ha"));

        let missing = run(&ctx, "crop mango").await.unwrap();
        assert_eq!(missing, "No data available for 'mango'");
    }

    #[tokio::test(start_paused = true)]
    async fn errors_surface_as_domain_errors() {
        let ctx = context().await;

        let err = run(&ctx, "setup").await.unwrap_err();
        assert!(err.is(ErrorCode::ValidationFailed));

        let err = run(&ctx, "open crops").await.unwrap_err();
        assert!(err.is(ErrorCode::InvalidStateTransition));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_module_is_reported_not_failed() {
        let ctx = context().await;
        run(&ctx, "setup punjab").await.unwrap();
        assert_eq!(
            run(&ctx, "open market").await.unwrap(),
            "no module named 'market'"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn upload_reads_the_file() {
        let ctx = context().await;
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF]).unwrap();

        let line = format!("upload {}", file.path().display());
        assert!(run(&ctx, &line).await.unwrap().ends_with("processing"));

        let err = run(&ctx, "camera").await.unwrap_err();
        assert!(err.is(ErrorCode::Busy));
    }

    #[tokio::test(start_paused = true)]
    async fn upload_without_file_is_a_validation_error() {
        let ctx = context().await;
        let err = run(&ctx, "upload").await.unwrap_err();
        assert!(err.is(ErrorCode::ValidationFailed));
    }

    #[tokio::test(start_paused = true)]
    async fn prices_lists_every_crop() {
        let ctx = context().await;
        let board = run(&ctx, "prices").await.unwrap();
        assert!(board.starts_with("Crop Price Trends"));
        assert!(board.contains("₹6,700"));
        assert_eq!(board.lines().count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_is_json() {
        let ctx = context().await;
        let json: serde_json::Value =
            serde_json::from_str(&run(&ctx, "snapshot").await.unwrap()).unwrap();
        assert_eq!(json["phase"], "setup_pending");
        assert_eq!(json["voice"]["prompt"], "Tap to speak...");
    }
}

//! Console command grammar.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  states                       list states
  districts <state>            list districts of a state
  setup <state> [district]     complete location setup
  district <district>          change district
  open <module>                dashboard|crops|weather|prices|disease|voice|expert
  back                         return to the dashboard
  settings                     reopen location setup
  crop <id>                    show a crop (crops module)
  prices                       show the price board
  camera                       take a photo for diagnosis
  upload [path]                upload an image for diagnosis
  voice open|start|stop|close  voice assistant
  lang en|hi                   change language
  snapshot                     print the full state as JSON
  help                         show this text
  quit                         exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    Open,
    Start,
    Stop,
    Close,
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    States,
    Districts { state: String },
    Setup { state: String, district: String },
    District { district: String },
    Open { module: String },
    Back,
    Settings,
    Crop { crop_id: String },
    Prices,
    Camera,
    /// `None` models "no file selected".
    Upload { path: Option<PathBuf> },
    Voice(VoiceAction),
    Language { code: String },
    Snapshot,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        // District names may contain spaces ("Navi Mumbai").
        let rest: Vec<&str> = words.collect();
        let first = rest.first().map(|word| word.to_string());
        let tail = rest.get(1..).unwrap_or_default().join(" ");

        let command = match name.to_ascii_lowercase().as_str() {
            "states" => Command::States,
            "districts" => Command::Districts {
                state: first.ok_or(CommandError::Usage("districts <state>"))?,
            },
            "setup" => Command::Setup {
                state: first.unwrap_or_default(),
                district: tail,
            },
            "district" => Command::District {
                district: rest.join(" "),
            },
            "open" => Command::Open {
                module: first.ok_or(CommandError::Usage("open <module>"))?,
            },
            "back" => Command::Back,
            "settings" => Command::Settings,
            "crop" => Command::Crop {
                crop_id: first.unwrap_or_default(),
            },
            "prices" => Command::Prices,
            "camera" => Command::Camera,
            "upload" => Command::Upload {
                path: (!rest.is_empty()).then(|| PathBuf::from(rest.join(" "))),
            },
            "voice" => {
                const USAGE: &str = "voice open|start|stop|close";
                let action = match first.as_deref() {
                    Some("open") => VoiceAction::Open,
                    Some("start") => VoiceAction::Start,
                    Some("stop") => VoiceAction::Stop,
                    Some("close") => VoiceAction::Close,
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                Command::Voice(action)
            }
            "lang" => Command::Language {
                code: first.ok_or(CommandError::Usage("lang en|hi"))?,
            },
            "snapshot" => Command::Snapshot,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

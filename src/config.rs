//! Board-size configuration.
//!
//! Reads `config.toml` from the working directory. Loading never fails the
//! program: every problem falls back to the default board size, and
//! [`ConfigSource`] records which outcome happened so the caller can tell
//! the user before the game starts.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use tui_2048_types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// On-disk shape of the config file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    board_size: Option<i64>,
}

/// How the effective board size was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Valid value loaded from the config file
    File(usize),
    /// No config file present
    MissingFile,
    /// The file exists but could not be read
    Unreadable,
    /// The file is not valid TOML (or `board_size` is not an integer)
    BadParse,
    /// The file parses but `board_size` is not set
    Unset,
    /// `board_size` is an integer outside the supported range
    OutOfRange(i64),
}

/// Effective configuration plus its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub board_size: usize,
    pub source: ConfigSource,
}

impl Config {
    /// Load from [`CONFIG_FILE`] in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Self::fallback(ConfigSource::MissingFile);
            }
            Err(_) => return Self::fallback(ConfigSource::Unreadable),
        };

        let parsed: FileConfig = match toml::from_str(&content) {
            Ok(parsed) => parsed,
            Err(_) => return Self::fallback(ConfigSource::BadParse),
        };

        match parsed.board_size {
            None => Self::fallback(ConfigSource::Unset),
            Some(n) if (MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64).contains(&n) => Self {
                board_size: n as usize,
                source: ConfigSource::File(n as usize),
            },
            Some(n) => Self::fallback(ConfigSource::OutOfRange(n)),
        }
    }

    fn fallback(source: ConfigSource) -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            source,
        }
    }

    /// User-facing line describing which default/override was chosen
    pub fn notice(&self) -> String {
        let d = DEFAULT_BOARD_SIZE;
        match self.source {
            ConfigSource::File(n) => {
                format!("Loaded board size {n}x{n} from '{CONFIG_FILE}'.")
            }
            ConfigSource::MissingFile => {
                format!("'{CONFIG_FILE}' not found. Using default size {d}x{d}.")
            }
            ConfigSource::Unreadable => {
                format!("Could not read '{CONFIG_FILE}'. Using default size {d}x{d}.")
            }
            ConfigSource::BadParse => {
                format!("Could not parse '{CONFIG_FILE}'. Using default size {d}x{d}.")
            }
            ConfigSource::Unset => {
                format!("'board_size' is not set in '{CONFIG_FILE}'. Using default size {d}x{d}.")
            }
            ConfigSource::OutOfRange(n) => format!(
                "'board_size' ({n}) in '{CONFIG_FILE}' is outside {MIN_BOARD_SIZE}-{MAX_BOARD_SIZE}. Using default size {d}x{d}."
            ),
        }
    }
}

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use iced::Theme;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::Verbosity;

pub const CONFIG_FILE: &str = "student_records.json";

/// Startup settings. Read once; the roster itself is never written anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_name: String,
    /// Start with the demo students instead of an empty roster.
    pub sample_roster: bool,
    /// Default log level; `RUST_LOG` still wins.
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: theme_to_str(&Theme::Light).to_string(),
            sample_roster: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl Config {
    /// A missing file is not an error: it yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::ConfigRead { path: path.to_path_buf(), source });
            }
        };
        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme_name, "unknown theme, falling back to Light");
            Theme::Light
        })
    }
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| theme_to_str(t).eq_ignore_ascii_case(name))
        .cloned()
}

pub fn theme_names() -> Vec<&'static str> {
    Theme::ALL.iter().map(theme_to_str).collect()
}

pub fn theme_to_str(theme: &Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::Dracula => "Dracula",
        Theme::Nord => "Nord",
        Theme::SolarizedLight => "SolarizedLight",
        Theme::SolarizedDark => "SolarizedDark",
        Theme::GruvboxLight => "GruvboxLight",
        Theme::GruvboxDark => "GruvboxDark",
        Theme::CatppuccinLatte => "CatppuccinLatte",
        Theme::CatppuccinFrappe => "CatppuccinFrappe",
        Theme::CatppuccinMacchiato => "CatppuccinMacchiato",
        Theme::CatppuccinMocha => "CatppuccinMocha",
        Theme::TokyoNight => "TokyoNight",
        Theme::TokyoNightStorm => "TokyoNightStorm",
        Theme::TokyoNightLight => "TokyoNightLight",
        Theme::KanagawaWave => "KanagawaWave",
        Theme::KanagawaDragon => "KanagawaDragon",
        Theme::KanagawaLotus => "KanagawaLotus",
        Theme::Moonfly => "Moonfly",
        Theme::Nightfly => "Nightfly",
        Theme::Oxocarbon => "Oxocarbon",
        Theme::Ferra => "Ferra",
        _ => "Unknown",
    }
}

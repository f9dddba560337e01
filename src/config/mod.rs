use crate::core::colors::{ColorAssigner, default_palette};
use crate::core::holidays::HolidayCalendar;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// "en" or "ru": month/weekday labels and date display format.
    #[serde(default = "default_language")]
    pub language: String,
    /// "palette" (default) or "seeded".
    #[serde(default = "default_color_strategy")]
    pub color_strategy: String,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub color_seed: u64,
    /// Extra or replacement holiday sets, year → ["YYYY-MM-DD", ...].
    #[serde(default)]
    pub holidays: BTreeMap<i32, Vec<String>>,
}

fn default_language() -> String {
    "en".to_string()
}
fn default_color_strategy() -> String {
    "palette".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    pub fn with_database(database: String) -> Self {
        Self {
            database,
            language: default_language(),
            color_strategy: default_color_strategy(),
            palette: default_palette(),
            color_seed: 0,
            holidays: BTreeMap::new(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvacations")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rvacations")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvacations.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rvacations.sqlite")
    }

    /// Path of a `--db` argument: absolute paths as given, relative ones
    /// under the config directory. `init` and every other command agree.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from the standard file, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !matches!(self.language.as_str(), "en" | "ru") {
            return Err(AppError::Config(format!(
                "unsupported language '{}' (use en or ru)",
                self.language
            )));
        }
        if !matches!(self.color_strategy.as_str(), "palette" | "seeded") {
            return Err(AppError::Config(format!(
                "unsupported color_strategy '{}' (use palette or seeded)",
                self.color_strategy
            )));
        }
        Ok(())
    }

    pub fn color_assigner(&self) -> ColorAssigner {
        match self.color_strategy.as_str() {
            "seeded" => ColorAssigner::Seeded {
                seed: self.color_seed,
            },
            _ => ColorAssigner::palette(self.palette.clone()),
        }
    }

    pub fn holiday_calendar(&self) -> AppResult<HolidayCalendar> {
        HolidayCalendar::with_overrides(&self.holidays)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        let config = Config::with_database(db_path.to_string_lossy().to_string());

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }
}

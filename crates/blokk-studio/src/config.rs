use std::path::PathBuf;

use anyhow::{Context, Result};

use blokk_engine::logging::LoggingConfig;
use blokk_shapes::ThumbnailOptions;

/// Environment variable overriding the thumbnail edge length in pixels.
pub const THUMB_SIZE_VAR: &str = "BLOKK_THUMB_SIZE";
/// Environment variable holding an `env_logger` filter; takes precedence
/// over `RUST_LOG`.
pub const LOG_VAR: &str = "BLOKK_LOG";
/// Environment variable naming the shape to select before exporting.
pub const SELECT_VAR: &str = "BLOKK_SELECT";

const DEFAULT_OUT_DIR: &str = "blokk-out";

/// Studio run configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub out_dir: PathBuf,
    pub thumbnail: ThumbnailOptions,
    pub logging: LoggingConfig,
    /// Shape name to select; the first shape stays selected when `None`.
    pub select: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            thumbnail: ThumbnailOptions::default(),
            logging: LoggingConfig::default(),
            select: None,
        }
    }
}

impl StudioConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_parts(std::env::args().skip(1), std::env::var(THUMB_SIZE_VAR).ok())?;
        config.select = std::env::var(SELECT_VAR).ok().filter(|s| !s.is_empty());
        config.set_log_filter(std::env::var(LOG_VAR).ok());
        Ok(config)
    }

    /// Uses `filter` for the logger unless it is missing or blank.
    pub fn set_log_filter(&mut self, filter: Option<String>) {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.logging = LoggingConfig::with_filter(filter.trim());
        }
    }

    /// `args` excludes the program name; the first one is the output directory.
    pub fn from_parts(mut args: impl Iterator<Item = String>, thumb_size: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = args.next() {
            config.out_dir = PathBuf::from(dir);
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument `{extra}` (usage: blokk-studio [OUT_DIR])");
        }

        if let Some(raw) = thumb_size {
            let size: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{THUMB_SIZE_VAR}=`{raw}` is not a pixel count"))?;
            anyhow::ensure!(size > 0, "{THUMB_SIZE_VAR} must be positive");
            config.thumbnail.size = size;
        }

        Ok(config)
    }
}

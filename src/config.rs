use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::divergence::DivergenceParams;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub divergence: DivergenceParams,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Kline JSON file in Binance REST layout.
    pub path: PathBuf,
    pub symbol: String,
    pub kline_interval: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Offset applied when rendering timestamps, e.g. 8 for UTC+8.
    #[serde(default)]
    pub utc_offset_hours: i32,
    #[serde(default = "default_recent_indicator_rows")]
    pub recent_indicator_rows: usize,
}

fn default_recent_indicator_rows() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 0,
            recent_indicator_rows: default_recent_indicator_rows(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parse a Binance kline interval string (e.g. "1s", "15m", "4h", "1d", "1w", "1M") into milliseconds.
pub fn parse_interval_ms(s: &str) -> Result<u64> {
    if s.len() < 2 {
        bail!("invalid interval '{}': expected format like '15m'", s);
    }

    let (num_str, suffix) = s.split_at(s.len() - 1);
    let n: u64 = num_str
        .parse()
        .with_context(|| format!("invalid interval '{}': quantity must be a positive integer", s))?;
    if n == 0 {
        bail!("invalid interval '{}': quantity must be > 0", s);
    }

    let unit_ms = match suffix {
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        "w" => 7 * 86_400_000,
        "M" => 30 * 86_400_000,
        _ => bail!(
            "invalid interval '{}': unsupported suffix '{}', expected one of s/m/h/d/w/M",
            s,
            suffix
        ),
    };

    n.checked_mul(unit_ms)
        .with_context(|| format!("invalid interval '{}': value is too large", s))
}

impl DataConfig {
    pub fn kline_interval_ms(&self) -> Result<u64> {
        parse_interval_ms(&self.kline_interval)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("failed to parse config")?;

        config
            .data
            .kline_interval_ms()
            .context("data.kline_interval is invalid")?;
        if config.divergence.max_time_gap_minutes <= 0.0 {
            bail!("divergence.max_time_gap_minutes must be > 0");
        }
        if config.divergence.min_price_change_percent < 0.0 {
            bail!("divergence.min_price_change_percent must be >= 0");
        }
        if config.report.utc_offset_hours.abs() > 14 {
            bail!("report.utc_offset_hours must be within -14..=14");
        }

        Ok(config)
    }
}

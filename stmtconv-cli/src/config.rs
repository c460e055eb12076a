use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use stmtconv_ingest::OutputFormat;

use crate::state::{ensure_stmtconv_home, stmtconv_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub parse: ParseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    /// IANA zone used for the `converted_at` timestamp
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseSection {
    /// Skip detection and always parse with this format id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "Europe/Amsterdam".to_string()
}

pub fn config_path() -> Result<PathBuf> {
    Ok(stmtconv_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_stmtconv_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse().map_err(|_| anyhow!("invalid timezone: {tz}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.output.format, OutputFormat::Csv);
        assert_eq!(cfg.output.timezone, "Europe/Amsterdam");
        assert!(cfg.parse.bank.is_none());
    }

    #[test]
    fn test_partial_file() {
        let cfg = parse_config("[output]\nformat = \"json\"\n\n[parse]\nbank = \"rabobank\"\n").unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.output.timezone, "Europe/Amsterdam");
        assert_eq!(cfg.parse.bank.as_deref(), Some("rabobank"));
    }

    #[test]
    fn test_round_trip_default() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(parse_config("[output]\nformat = \"xlsx\"\n").is_err());
    }

    #[test]
    fn test_timezone() {
        assert!(parse_timezone("Europe/Amsterdam").is_ok());
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}

pub mod toml_config;

use crate::core::format::FormatConfig;
use crate::domain::model::{LayoutKind, Orientation};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_NAMES_DIR: &str = "names";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "seating")]
#[command(about = "Random classroom seating plans in the terminal")]
pub struct CliConfig {
    /// Directory holding roster .txt files
    #[arg(long)]
    pub names_dir: Option<PathBuf>,

    /// Roster file to use instead of the selection menu
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub layout: Option<LayoutKind>,

    /// Which edge of the room is printed at the top (tier layout)
    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,

    /// Print names without colour
    #[arg(long)]
    pub no_colour: bool,

    /// Seed for reproducible plans
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub names_dir: PathBuf,
    pub file: Option<PathBuf>,
    pub layout: LayoutKind,
    pub orientation: Orientation,
    pub format: FormatConfig,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            names_dir: PathBuf::from(DEFAULT_NAMES_DIR),
            file: None,
            layout: LayoutKind::default(),
            orientation: Orientation::default(),
            format: FormatConfig::default(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        let defaults = Settings::default();

        Ok(Self {
            names_dir: file
                .names_dir()
                .map(PathBuf::from)
                .unwrap_or(defaults.names_dir),
            layout: file.layout_kind().unwrap_or(defaults.layout),
            orientation: file.orientation().unwrap_or(defaults.orientation),
            format: file.format_config()?,
            ..defaults
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Settings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(dir) = &cli.names_dir {
            settings.names_dir = dir.clone();
        }
        if let Some(layout) = cli.layout {
            settings.layout = layout;
        }
        if let Some(orientation) = cli.orientation {
            settings.orientation = orientation;
        }
        if cli.no_colour {
            settings.format.colour = false;
        }
        settings.file = cli.file.clone();
        settings.seed = cli.seed;

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.file.is_none() {
            validate_path("names_dir", &self.names_dir.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["seating"]);
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.format.colour);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[session]\nlayout = \"tiers\"\norientation = \"back-first\"\nnames_dir = \"from-file\"\n",
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from([
            "seating",
            "--config",
            &path,
            "--orientation",
            "front-first",
            "--no-colour",
            "--seed",
            "42",
        ]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.layout, LayoutKind::Tiers);
        assert_eq!(settings.orientation, Orientation::FrontFirst);
        assert_eq!(settings.names_dir, PathBuf::from("from-file"));
        assert!(!settings.format.colour);
        assert_eq!(settings.seed, Some(42));
    }
}

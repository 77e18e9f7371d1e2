use crate::core::format::{FormatConfig, Palette};
use crate::domain::model::{LayoutKind, Orientation};
use crate::utils::error::{Result, SeatingError};
use crate::utils::validation::{
    parse_colour, validate_path, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub session: Option<SessionConfig>,
    pub layout: Option<LayoutConfig>,
    pub colours: Option<ColourConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub names_dir: Option<String>,
    pub layout: Option<LayoutKind>,
    pub orientation: Option<Orientation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub min_offset: Option<usize>,
    pub offset_proportion: Option<usize>,
    pub column_gap: Option<usize>,
    pub row_spacing: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColourConfig {
    pub enabled: Option<bool>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub default: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeatingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SeatingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn names_dir(&self) -> Option<&str> {
        self.session.as_ref()?.names_dir.as_deref()
    }

    pub fn layout_kind(&self) -> Option<LayoutKind> {
        self.session.as_ref()?.layout
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.session.as_ref()?.orientation
    }

    /// Formatter settings with defaults filled in for anything unset.
    pub fn format_config(&self) -> Result<FormatConfig> {
        let mut format = FormatConfig::default();

        if let Some(layout) = &self.layout {
            format.min_offset = layout.min_offset.unwrap_or(format.min_offset);
            format.offset_proportion = layout.offset_proportion.unwrap_or(format.offset_proportion);
            format.column_gap = layout.column_gap.unwrap_or(format.column_gap);
            format.row_spacing = layout.row_spacing.unwrap_or(format.row_spacing);
        }

        if let Some(colours) = &self.colours {
            format.colour = colours.enabled.unwrap_or(format.colour);
            let defaults = Palette::default();
            format.palette = Palette {
                a: colours
                    .a
                    .as_deref()
                    .map(|name| parse_colour("colours.a", name))
                    .transpose()?
                    .unwrap_or(defaults.a),
                b: colours
                    .b
                    .as_deref()
                    .map(|name| parse_colour("colours.b", name))
                    .transpose()?
                    .unwrap_or(defaults.b),
                default: colours
                    .default
                    .as_deref()
                    .map(|name| parse_colour("colours.default", name))
                    .transpose()?
                    .unwrap_or(defaults.default),
            };
        }

        Ok(format)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = self.names_dir() {
            validate_path("session.names_dir", dir)?;
        }

        if let Some(layout) = &self.layout {
            if let Some(min_offset) = layout.min_offset {
                validate_positive_number("layout.min_offset", min_offset, 1)?;
            }
            if let Some(proportion) = layout.offset_proportion {
                validate_positive_number("layout.offset_proportion", proportion, 1)?;
            }
            if let Some(gap) = layout.column_gap {
                validate_range("layout.column_gap", gap, 0, 16)?;
            }
            if let Some(spacing) = layout.row_spacing {
                validate_range("layout.row_spacing", spacing, 0, 4)?;
            }
        }

        // surfaces unknown colour names
        self.format_config()?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

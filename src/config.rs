use crossterm::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Color of the prompt, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptColor {
    #[default]
    Green,
    Red,
    /// No escape sequences at all.
    Plain,
}

impl PromptColor {
    /// Map a configured color name. Unrecognized names yield `None` so the
    /// caller can fall back to the default.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "none" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Foreground color for the escape sequence, if this variant has one.
    pub fn foreground(self) -> Option<Color> {
        match self {
            Self::Green => Some(Color::Green),
            Self::Red => Some(Color::Red),
            Self::Plain => None,
        }
    }
}

/// Resolved configuration. Loading is strictly best-effort: any failure
/// falls back to these defaults without a user-visible diagnostic.
#[derive(Debug, Clone)]
pub struct Config {
    pub color: PromptColor,
    pub line_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: PromptColor::default(),
            line_limit: 4096,
        }
    }
}

/// On-disk schema of `~/.msh.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    line_limit: Option<usize>,
    #[serde(default)]
    prompt: PromptSection,
}

#[derive(Debug, Default, Deserialize)]
struct PromptSection {
    color: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from `$HOME/.msh.toml` when no
    /// override is given. Never fails.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Self::default(),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) => {
                log::debug!("no config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    fn default_path() -> Option<PathBuf> {
        let home = std::env::var("HOME").ok()?;
        Some(Path::new(&home).join(".msh.toml"))
    }

    fn from_toml(text: &str) -> Self {
        let file: ConfigFile = match toml::from_str(text) {
            Ok(file) => file,
            Err(err) => {
                log::debug!("config parse error: {}", err);
                return Self::default();
            }
        };

        let defaults = Self::default();
        let color = match file.prompt.color.as_deref() {
            Some(name) => PromptColor::from_name(name).unwrap_or_else(|| {
                log::debug!("unrecognized prompt color {:?}", name);
                defaults.color
            }),
            None => defaults.color,
        };

        Self {
            color,
            line_limit: file.line_limit.unwrap_or(defaults.line_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognized_colors_map_to_variants() {
        let config = Config::from_toml("[prompt]\ncolor = \"red\"\n");
        assert_eq!(config.color, PromptColor::Red);

        let config = Config::from_toml("[prompt]\ncolor = \"green\"\n");
        assert_eq!(config.color, PromptColor::Green);

        let config = Config::from_toml("[prompt]\ncolor = \"none\"\n");
        assert_eq!(config.color, PromptColor::Plain);
    }

    #[test]
    fn unrecognized_color_falls_back_to_default() {
        let config = Config::from_toml("[prompt]\ncolor = \"blue\"\n");
        assert_eq!(config.color, PromptColor::Green);
    }

    #[test]
    fn missing_section_falls_back_to_default() {
        let config = Config::from_toml("");
        assert_eq!(config.color, PromptColor::Green);
        assert_eq!(config.line_limit, 4096);
    }

    #[test]
    fn invalid_toml_falls_back_to_default() {
        let config = Config::from_toml("[prompt\ncolor =");
        assert_eq!(config.color, PromptColor::Green);
    }

    #[test]
    fn line_limit_is_configurable() {
        let config = Config::from_toml("line_limit = 64\n");
        assert_eq!(config.line_limit, 64);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent-msh-config.toml")));
        assert_eq!(config.color, PromptColor::Green);
        assert_eq!(config.line_limit, 4096);
    }
}

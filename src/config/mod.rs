use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

pub mod defaults;

use defaults::*;

/// Region and display label for one country code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub region: String,
    pub label: String,
}

/// One keyword-to-genre rule; rules are tried in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRule {
    pub keyword: String,
    pub genre: String,
}

/// Fixed labels spliced into rewritten headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Group that starred channels are duplicated into
    #[serde(default = "default_favorites_group")]
    pub favorites_group: String,
    /// Fallback for unknown regions, countries and genres
    #[serde(default = "default_other_label")]
    pub other: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_path: Option<PathBuf>,
    #[serde(default = "default_append_resolution_tag")]
    pub append_resolution_tag: bool,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default = "default_countries")]
    pub countries: BTreeMap<String, CountryInfo>,
    #[serde(default = "default_genres")]
    pub genres: Vec<GenreRule>,
}

fn default_favorites_group() -> String {
    DEFAULT_FAVORITES_GROUP.to_string()
}

fn default_other_label() -> String {
    DEFAULT_OTHER_LABEL.to_string()
}

fn default_append_resolution_tag() -> bool {
    DEFAULT_APPEND_RESOLUTION_TAG
}

fn default_countries() -> BTreeMap<String, CountryInfo> {
    DEFAULT_COUNTRIES
        .iter()
        .map(|(code, region, label)| {
            (
                code.to_string(),
                CountryInfo {
                    region: region.to_string(),
                    label: label.to_string(),
                },
            )
        })
        .collect()
}

fn default_genres() -> Vec<GenreRule> {
    DEFAULT_GENRES
        .iter()
        .map(|(keyword, genre)| GenreRule {
            keyword: keyword.to_string(),
            genre: genre.to_string(),
        })
        .collect()
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            favorites_group: default_favorites_group(),
            other: default_other_label(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            favorites_path: None,
            append_resolution_tag: default_append_resolution_tag(),
            labels: LabelConfig::default(),
            countries: default_countries(),
            genres: default_genres(),
        }
    }
}

impl Config {
    /// Use the given TOML file when one is named, otherwise the built-in defaults.
    pub fn resolve(config_file: Option<&Path>) -> AppResult<Self> {
        match config_file {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("No configuration file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> AppResult<Self> {
        let config_file = config_file.as_ref();
        if !config_file.exists() {
            return Err(AppError::configuration(format!(
                "configuration file {} does not exist",
                config_file.display()
            )));
        }
        let contents =
            std::fs::read_to_string(config_file).map_err(|e| AppError::io(config_file, e))?;
        let config = Self::from_toml_str(&contents)?;
        info!("Configuration loaded from: {}", config_file.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let mut config: Self = toml::from_str(contents)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Uppercase country codes, lowercase genre keywords, trim labels.
    fn normalize(&mut self) {
        self.countries = std::mem::take(&mut self.countries)
            .into_iter()
            .map(|(code, info)| {
                (
                    code.trim().to_uppercase(),
                    CountryInfo {
                        region: info.region.trim().to_string(),
                        label: info.label.trim().to_string(),
                    },
                )
            })
            .collect();
        for rule in &mut self.genres {
            rule.keyword = rule.keyword.trim().to_lowercase();
            rule.genre = rule.genre.trim().to_string();
        }
        self.labels.favorites_group = self.labels.favorites_group.trim().to_string();
        self.labels.other = self.labels.other.trim().to_string();
    }

    pub fn validate(&self) -> AppResult<()> {
        check_label("labels.favorites_group", &self.labels.favorites_group)?;
        check_label("labels.other", &self.labels.other)?;

        for (code, info) in &self.countries {
            if code.is_empty() {
                return Err(AppError::configuration("country code must not be empty"));
            }
            check_label(&format!("countries.{code}.region"), &info.region)?;
            check_label(&format!("countries.{code}.label"), &info.label)?;
        }

        for (index, rule) in self.genres.iter().enumerate() {
            if rule.keyword.is_empty() {
                return Err(AppError::configuration(format!(
                    "genres[{index}].keyword must not be empty"
                )));
            }
            check_label(&format!("genres[{index}].genre"), &rule.genre)?;
        }

        Ok(())
    }
}

/// Labels end up inside `group-title="..."`, so they cannot be empty or hold a quote.
fn check_label(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::configuration(format!("{field} must not be empty")));
    }
    if value.contains('"') {
        return Err(AppError::configuration(format!(
            "{field} must not contain a double quote: {value}"
        )));
    }
    Ok(())
}

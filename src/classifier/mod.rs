//! Region, country and genre classification
//!
//! A [`ClassificationPolicy`] bundles the two lookup tables and the fallback
//! label. It is built from [`Config`] so the tables can be replaced without
//! touching the lookup logic. Every lookup returns a value; unknown keys
//! resolve to the fallback label.

use std::collections::HashMap;

use crate::config::{Config, CountryInfo, GenreRule};
use crate::models::{ChannelRecord, Classification};

pub mod quality;

pub use quality::{detect_quality, detect_record_quality};

#[derive(Debug, Clone)]
pub struct ClassificationPolicy {
    countries: HashMap<String, CountryInfo>,
    genres: Vec<GenreRule>,
    other: String,
}

impl ClassificationPolicy {
    /// Country keys are matched uppercase, genre keywords lowercase.
    pub fn new(
        countries: impl IntoIterator<Item = (String, CountryInfo)>,
        genres: Vec<GenreRule>,
        other: impl Into<String>,
    ) -> Self {
        Self {
            countries: countries
                .into_iter()
                .map(|(code, info)| (code.to_uppercase(), info))
                .collect(),
            genres: genres
                .into_iter()
                .map(|rule| GenreRule {
                    keyword: rule.keyword.to_lowercase(),
                    genre: rule.genre,
                })
                .collect(),
            other: other.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.countries.clone(),
            config.genres.clone(),
            config.labels.other.clone(),
        )
    }

    /// `(region, country label)` for a country code
    ///
    /// An unknown code keeps the raw code as its country label; an empty code
    /// falls back to the "other" label for both.
    pub fn classify_geography(&self, country_code: &str) -> (String, String) {
        match self.countries.get(&country_code.to_uppercase()) {
            Some(info) => (info.region.clone(), info.label.clone()),
            None if country_code.is_empty() => (self.other.clone(), self.other.clone()),
            None => (self.other.clone(), country_code.to_string()),
        }
    }

    /// Genre of the first rule whose keyword occurs in the lowercased category
    pub fn classify_genre(&self, category: &str) -> String {
        if category.is_empty() {
            return self.other.clone();
        }
        let lower = category.to_lowercase();
        self.genres
            .iter()
            .find(|rule| lower.contains(&rule.keyword))
            .map(|rule| rule.genre.clone())
            .unwrap_or_else(|| self.other.clone())
    }

    pub fn classify(&self, record: &ChannelRecord) -> Classification {
        let (region, country) = self.classify_geography(&record.country_code);
        Classification {
            region,
            country,
            genre: self.classify_genre(&record.original_category),
        }
    }

    pub fn other_label(&self) -> &str {
        &self.other
    }
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

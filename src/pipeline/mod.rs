//! The regrouping run
//!
//! Stages, in order:
//!   1. read the input playlist
//!   2. parse headers into records
//!   3. per record: classify, detect quality, match favorites, rewrite
//!   4. emit the accumulated entries
//!
//! Records are independent of one another; output order follows input order.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::classifier::{ClassificationPolicy, detect_record_quality};
use crate::config::Config;
use crate::errors::AppResult;
use crate::favorites::FavoriteMatcher;
use crate::ingestor::{parse_playlist, read_playlist};
use crate::models::{OutputEntry, QualityTier};
use crate::proxy::{Rewriter, write_playlist, write_playlist_to};

/// Where the regrouped playlist goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` means stdout, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(arg.to_path_buf())
        }
    }
}

/// Counters collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records recovered from the input
    pub parsed: usize,
    /// Headers dropped for lacking a display name or a usable marker
    pub dropped: usize,
    /// Records duplicated into the favorites group
    pub favorites: usize,
    /// Output entries written
    pub emitted: usize,
    pub tiers: BTreeMap<QualityTier, usize>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsed={} dropped={} favorites={} emitted={}",
            self.parsed, self.dropped, self.favorites, self.emitted
        )?;
        for (tier, count) in &self.tiers {
            write!(f, " {tier}={count}")?;
        }
        Ok(())
    }
}

/// Result of transforming playlist text in memory
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub entries: Vec<OutputEntry>,
    pub summary: RunSummary,
}

pub struct Pipeline {
    policy: ClassificationPolicy,
    favorites: FavoriteMatcher,
    rewriter: Rewriter,
}

impl Pipeline {
    pub fn new(policy: ClassificationPolicy, favorites: FavoriteMatcher, rewriter: Rewriter) -> Self {
        Self {
            policy,
            favorites,
            rewriter,
        }
    }

    /// Build every stage from configuration, loading favorites from `favorites_path`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let favorites = FavoriteMatcher::load(config.favorites_path.as_deref())?;
        Ok(Self::new(
            ClassificationPolicy::from_config(config),
            favorites,
            Rewriter::new(
                config.labels.favorites_group.clone(),
                config.append_resolution_tag,
            ),
        ))
    }

    /// Regroup playlist text without touching the filesystem
    pub fn transform(&self, content: &str) -> Transformed {
        let parsed = parse_playlist(content);
        let mut summary = RunSummary {
            parsed: parsed.records.len(),
            dropped: parsed.dropped,
            ..RunSummary::default()
        };

        let mut entries = Vec::with_capacity(parsed.records.len());
        for record in &parsed.records {
            let classification = self.policy.classify(record);
            let tier = detect_record_quality(record);
            let is_favorite = self.favorites.is_favorite(&record.display_name);

            let produced = self
                .rewriter
                .rewrite(record, &classification, tier, is_favorite);
            debug!(
                "'{}' -> '{}' [{}]{}",
                record.display_name,
                classification.group_label(),
                tier,
                if is_favorite { " (favorite)" } else { "" }
            );

            *summary.tiers.entry(tier).or_default() += 1;
            if is_favorite {
                summary.favorites += 1;
            }
            entries.extend(produced);
        }

        summary.emitted = entries.len();
        Transformed { entries, summary }
    }

    /// Read `input`, regroup it and write the result to `output`
    pub fn run(&self, input: &Path, output: &OutputTarget) -> AppResult<RunSummary> {
        let content = read_playlist(input)?;
        let Transformed { entries, summary } = self.transform(&content);

        match output {
            OutputTarget::File(path) => write_playlist(path, &entries)?,
            OutputTarget::Stdout => write_playlist_to(&mut std::io::stdout().lock(), &entries)?,
        }

        info!("Regrouping complete: {}", summary);
        Ok(summary)
    }
}

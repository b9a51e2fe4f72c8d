//! Resolution tier detection from free text
//!
//! Tiers are tested from best to worst and the first hit wins, so a name
//! carrying both `1080p` and `HD` is FHD.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use crate::models::{ChannelRecord, QualityTier};

/// Marker patterns per tier, in cascade order
const QUALITY_MARKERS: &[(QualityTier, &str)] = &[
    (QualityTier::Uhd, r"2160p?|4k|uhd"),
    (QualityTier::Fhd, r"1080p?|fhd|full[\s_-]?hd"),
    (QualityTier::Hd, r"720p?|hd"),
];

struct TierPattern {
    tier: QualityTier,
    regex: Regex,
}

fn cascade() -> &'static [TierPattern] {
    static CASCADE: OnceLock<Vec<TierPattern>> = OnceLock::new();
    CASCADE.get_or_init(|| {
        QUALITY_MARKERS
            .iter()
            .map(|(tier, pattern)| TierPattern {
                tier: *tier,
                regex: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("quality marker patterns are valid"),
            })
            .collect()
    })
}

/// Quality tier for arbitrary text; SD when no marker is present
pub fn detect_quality(text: &str) -> QualityTier {
    cascade()
        .iter()
        .find(|pattern| pattern.regex.is_match(text))
        .map(|pattern| pattern.tier)
        .unwrap_or_default()
}

/// Quality tier for a record, looking at both its header and display name
pub fn detect_record_quality(record: &ChannelRecord) -> QualityTier {
    detect_quality(&format!("{} {}", record.raw_header, record.display_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Movie Channel 2160p", QualityTier::Uhd)]
    #[case("Nature 4K", QualityTier::Uhd)]
    #[case("UHD Showcase 1080p", QualityTier::Uhd)]
    #[case("Sports 1080p HD", QualityTier::Fhd)]
    #[case("News FHD", QualityTier::Fhd)]
    #[case("Cinema Full HD", QualityTier::Fhd)]
    #[case("Cinema Full-HD", QualityTier::Fhd)]
    #[case("Cinema FULL_HD", QualityTier::Fhd)]
    #[case("Cinema fullhd", QualityTier::Fhd)]
    #[case("Local 720p", QualityTier::Hd)]
    #[case("Local HD", QualityTier::Hd)]
    #[case("Local 720", QualityTier::Hd)]
    #[case("Plain Channel", QualityTier::Sd)]
    #[case("", QualityTier::Sd)]
    fn test_cascade(#[case] text: &str, #[case] expected: QualityTier) {
        assert_eq!(detect_quality(text), expected);
    }

    #[test]
    fn test_header_markers_count() {
        let record = ChannelRecord {
            raw_header: "#EXTINF:-1 tvg-id=\"movies.1080p\",Movies".to_string(),
            stream_address: "http://x/1".to_string(),
            display_name: "Movies".to_string(),
            country_code: String::new(),
            original_category: String::new(),
        };
        assert_eq!(detect_record_quality(&record), QualityTier::Fhd);
    }

    #[test]
    fn test_display_name_markers_count() {
        let record = ChannelRecord {
            raw_header: "#EXTINF:-1,Movies".to_string(),
            stream_address: String::new(),
            display_name: "Movies 4K".to_string(),
            country_code: String::new(),
            original_category: String::new(),
        };
        assert_eq!(detect_record_quality(&record), QualityTier::Uhd);
    }
}

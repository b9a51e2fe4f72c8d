use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Separator between the segments of a composite group label
pub const GROUP_SEPARATOR: &str = " - ";

/// One `#EXTINF` header and the line that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Original metadata line, used as the template for rewriting
    pub raw_header: String,
    /// Line immediately following the header; empty when the header ended the input
    pub stream_address: String,
    /// Text after the final comma of the header
    pub display_name: String,
    /// First code of `tvg-country`, empty when absent
    pub country_code: String,
    /// Value of `group-title`, empty when absent
    pub original_category: String,
}

/// Region, country and genre derived for a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub region: String,
    pub country: String,
    pub genre: String,
}

impl Classification {
    /// `"{region} - {country} - {genre}"`
    pub fn group_label(&self) -> String {
        [
            self.region.as_str(),
            self.country.as_str(),
            self.genre.as_str(),
        ]
        .join(GROUP_SEPARATOR)
    }
}

/// Video quality inferred from text markers
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum QualityTier {
    Uhd,
    Fhd,
    Hd,
    #[default]
    Sd,
}

/// A rewritten header/address pair ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub header: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_group_label_has_three_segments() {
        let classification = Classification {
            region: "아시아".to_string(),
            country: "대한민국".to_string(),
            genre: "뉴스".to_string(),
        };
        assert_eq!(classification.group_label(), "아시아 - 대한민국 - 뉴스");
        assert_eq!(classification.group_label().split(GROUP_SEPARATOR).count(), 3);
    }

    #[test]
    fn test_quality_tier_names() {
        let names: Vec<String> = QualityTier::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["UHD", "FHD", "HD", "SD"]);
        assert_eq!(QualityTier::from_str("FHD").unwrap(), QualityTier::Fhd);
        assert_eq!(QualityTier::default(), QualityTier::Sd);
    }
}

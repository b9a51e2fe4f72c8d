//! Header rewriting
//!
//! Each record fans out into one or two [`OutputEntry`]s: the favorites
//! duplicate (when the name matched a favorite pattern) followed by the entry
//! in its composite region/country/genre group. Both reuse the original
//! header as a template, so attributes this tool does not understand pass
//! through untouched.

use tracing::trace;

use crate::ingestor::m3u_parser::{EXTINF_MARKER, GROUP_ATTRIBUTE, HeaderParts, attribute_spans};
use crate::models::{ChannelRecord, Classification, OutputEntry, QualityTier};

#[derive(Debug, Clone)]
pub struct Rewriter {
    favorites_group: String,
    append_resolution_tag: bool,
}

impl Rewriter {
    pub fn new(favorites_group: impl Into<String>, append_resolution_tag: bool) -> Self {
        Self {
            favorites_group: favorites_group.into(),
            append_resolution_tag,
        }
    }

    /// Display name with ` [TIER]` appended when resolution tags are enabled
    pub fn final_display_name(&self, record: &ChannelRecord, tier: QualityTier) -> String {
        if self.append_resolution_tag {
            format!("{} [{}]", record.display_name, tier)
        } else {
            record.display_name.clone()
        }
    }

    /// Produce the favorites duplicate (if any) followed by the main-group entry
    pub fn rewrite(
        &self,
        record: &ChannelRecord,
        classification: &Classification,
        tier: QualityTier,
        is_favorite: bool,
    ) -> Vec<OutputEntry> {
        let name = self.final_display_name(record, tier);
        let mut entries = Vec::with_capacity(if is_favorite { 2 } else { 1 });

        if is_favorite {
            entries.push(OutputEntry {
                header: rewrite_header(&record.raw_header, &self.favorites_group, &name),
                address: record.stream_address.clone(),
            });
        }

        entries.push(OutputEntry {
            header: rewrite_header(&record.raw_header, &classification.group_label(), &name),
            address: record.stream_address.clone(),
        });

        entries
    }
}

/// Set the group attribute and trailing display name of a header line
///
/// An existing `group-title` has its value replaced in place and any
/// duplicates are removed. Without one, the attribute is inserted right after
/// the marker token. A line whose marker cannot be located is rebuilt from
/// scratch.
pub fn rewrite_header(header: &str, group: &str, display_name: &str) -> String {
    let Some(parts) = HeaderParts::split(header) else {
        trace!("Rebuilding unparseable header '{}'", header);
        return format!("{EXTINF_MARKER}:-1 {GROUP_ATTRIBUTE}=\"{group}\",{display_name}");
    };

    let attributes = set_group_attribute(parts.attributes, group);
    format!("{}{},{}", parts.marker, attributes, display_name)
}

fn set_group_attribute(attributes: &str, group: &str) -> String {
    let spans = attribute_spans(attributes, GROUP_ATTRIBUTE);
    if spans.is_empty() {
        return format!(" {GROUP_ATTRIBUTE}=\"{group}\"{attributes}");
    }

    let mut out = String::with_capacity(attributes.len() + group.len());
    let mut cursor = 0;
    for (index, span) in spans.iter().enumerate() {
        if index == 0 {
            out.push_str(&attributes[cursor..span.value_start]);
            out.push_str(group);
            cursor = span.value_end;
        } else {
            // drop the duplicate together with the whitespace in front of it
            let cut = attributes[..span.start].trim_end().len().max(cursor);
            out.push_str(&attributes[cursor..cut]);
            cursor = span.end;
        }
    }
    out.push_str(&attributes[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassificationPolicy;
    use crate::ingestor::m3u_parser::{attribute_value, parse_entry};

    fn classification() -> Classification {
        Classification {
            region: "아시아".to_string(),
            country: "대한민국".to_string(),
            genre: "뉴스".to_string(),
        }
    }

    #[test]
    fn test_replace_existing_group_in_place() {
        let header = "#EXTINF:-1 tvg-id=\"kbs1\" group-title=\"News\" tvg-logo=\"l.png\",KBS1";
        assert_eq!(
            rewrite_header(header, "아시아 - 대한민국 - 뉴스", "KBS1 [HD]"),
            "#EXTINF:-1 tvg-id=\"kbs1\" group-title=\"아시아 - 대한민국 - 뉴스\" tvg-logo=\"l.png\",KBS1 [HD]"
        );
    }

    #[test]
    fn test_insert_group_after_marker() {
        assert_eq!(
            rewrite_header("#EXTINF:-1 tvg-id=\"a\",Name", "G", "Name"),
            "#EXTINF:-1 group-title=\"G\" tvg-id=\"a\",Name"
        );
        assert_eq!(
            rewrite_header("#EXTINF:-1,Name", "G", "Name"),
            "#EXTINF:-1 group-title=\"G\",Name"
        );
        assert_eq!(
            rewrite_header("#EXTINF tvg-country=\"KR\",Name", "G", "Name"),
            "#EXTINF group-title=\"G\" tvg-country=\"KR\",Name"
        );
    }

    #[test]
    fn test_duplicate_groups_collapse_to_one() {
        let rewritten = rewrite_header(
            "#EXTINF:-1 group-title=\"A\" tvg-id=\"x\" group-title=\"B\",Name",
            "G",
            "Name",
        );
        assert_eq!(rewritten, "#EXTINF:-1 group-title=\"G\" tvg-id=\"x\",Name");
        assert_eq!(rewritten.matches("group-title=").count(), 1);
    }

    #[test]
    fn test_empty_group_value_is_replaced() {
        assert_eq!(
            rewrite_header("#EXTINF:-1 group-title=\"\",Name", "G", "New"),
            "#EXTINF:-1 group-title=\"G\",New"
        );
    }

    #[test]
    fn test_unparseable_header_is_rebuilt() {
        assert_eq!(
            rewrite_header("garbage", "G", "Name"),
            "#EXTINF:-1 group-title=\"G\",Name"
        );
    }

    #[test]
    fn test_non_favorite_yields_single_entry() {
        let record = parse_entry("#EXTINF:-1 group-title=\"News\",KBS1", "http://x/1").unwrap();
        let rewriter = Rewriter::new("★ Favorites", false);
        let entries = rewriter.rewrite(&record, &classification(), QualityTier::Sd, false);

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].header,
            "#EXTINF:-1 group-title=\"아시아 - 대한민국 - 뉴스\",KBS1"
        );
        assert_eq!(entries[0].address, "http://x/1");
    }

    #[test]
    fn test_favorite_duplicate_comes_first() {
        let record = parse_entry("#EXTINF:-1 group-title=\"News\",KBS1", "http://x/1").unwrap();
        let rewriter = Rewriter::new("★ Favorites", true);
        let entries = rewriter.rewrite(&record, &classification(), QualityTier::Fhd, true);

        assert_eq!(entries.len(), 2);
        assert_eq!(
            attribute_value(&entries[0].header, GROUP_ATTRIBUTE),
            Some("★ Favorites")
        );
        assert_eq!(
            attribute_value(&entries[1].header, GROUP_ATTRIBUTE),
            Some("아시아 - 대한민국 - 뉴스")
        );
        for entry in &entries {
            assert!(entry.header.ends_with(",KBS1 [FHD]"));
            assert_eq!(entry.address, "http://x/1");
        }
    }

    #[test]
    fn test_name_unchanged_without_tag_flag() {
        let record = parse_entry("#EXTINF:-1,Movies 4K", "http://x/1").unwrap();
        let rewriter = Rewriter::new("★ Favorites", false);
        assert_eq!(rewriter.final_display_name(&record, QualityTier::Uhd), "Movies 4K");
    }

    #[test]
    fn test_rewritten_header_reparses_to_same_geography() {
        let policy = ClassificationPolicy::default();
        let record = parse_entry(
            "#EXTINF:-1 tvg-country=\"FR;BE\" group-title=\"Sports\",Eurosport",
            "http://x/9",
        )
        .unwrap();
        let rewriter = Rewriter::new("★ Favorites", false);
        let entries = rewriter.rewrite(&record, &policy.classify(&record), QualityTier::Sd, false);

        let reparsed = parse_entry(&entries[0].header, &entries[0].address).unwrap();
        assert_eq!(reparsed.country_code, "FR");
        assert_eq!(reparsed.display_name, "Eurosport");
        assert_eq!(reparsed.original_category, "유럽 - 프랑스 - 스포츠");
    }
}

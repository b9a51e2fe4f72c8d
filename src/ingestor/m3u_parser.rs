//! M3U playlist parsing
//!
//! Turns raw playlist text into [`ChannelRecord`]s. Every `#EXTINF` header is
//! paired with the line that follows it, whatever that line holds, so the
//! stream address always travels with its header. Headers are scanned with a
//! small attribute routine rather than a general M3U grammar: only the
//! `key="value"` shapes this tool reads or rewrites are recognised.

use tracing::{debug, trace};

use crate::models::ChannelRecord;

/// Entry-metadata marker that opens every header line
pub const EXTINF_MARKER: &str = "#EXTINF";
/// Playlist start marker
pub const EXTM3U_MARKER: &str = "#EXTM3U";

pub const COUNTRY_ATTRIBUTE: &str = "tvg-country";
pub const GROUP_ATTRIBUTE: &str = "group-title";

/// Records recovered from a playlist plus the headers that had to be dropped
#[derive(Debug, Clone, Default)]
pub struct ParsedPlaylist {
    pub records: Vec<ChannelRecord>,
    pub dropped: usize,
}

/// A header line cut into its marker token, attribute section and display name
///
/// `marker` is `#EXTINF` plus its `:duration` when present. `attributes` is
/// everything between the marker and the final comma, `name` everything after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    pub marker: &'a str,
    pub attributes: &'a str,
    pub name: &'a str,
}

impl<'a> HeaderParts<'a> {
    /// Split a header line, or `None` when the marker or the final comma cannot be found.
    pub fn split(line: &'a str) -> Option<Self> {
        let rest = line.strip_prefix(EXTINF_MARKER)?;
        match rest.chars().next() {
            Some(':' | ',') => {}
            Some(c) if c.is_whitespace() => {}
            _ => return None,
        }

        let comma = line.rfind(',')?;
        let prefix = &line[..comma];
        let name = &line[comma + 1..];

        let marker_end = if prefix[EXTINF_MARKER.len()..].starts_with(':') {
            prefix
                .char_indices()
                .skip(EXTINF_MARKER.len())
                .find(|(_, c)| c.is_whitespace())
                .map(|(i, _)| i)
                .unwrap_or(prefix.len())
        } else {
            EXTINF_MARKER.len()
        };

        Some(Self {
            marker: &prefix[..marker_end],
            attributes: &prefix[marker_end..],
            name,
        })
    }
}

/// Byte offsets of one `key="value"` occurrence inside an attribute section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpan {
    /// Start of the key
    pub start: usize,
    /// One past the closing quote
    pub end: usize,
    pub value_start: usize,
    pub value_end: usize,
}

/// Every terminated `key="..."` occurrence in `section`, in order
///
/// A key only counts at a token boundary (start of section or after
/// whitespace). An occurrence with no closing quote is ignored.
pub fn attribute_spans(section: &str, key: &str) -> Vec<AttributeSpan> {
    let needle = format!("{key}=\"");
    let mut spans = Vec::new();
    let mut search_from = 0;

    while let Some(found) = section[search_from..].find(&needle) {
        let start = search_from + found;
        let value_start = start + needle.len();
        search_from = value_start;

        let at_boundary = section[..start]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        if !at_boundary {
            continue;
        }

        let Some(close) = section[value_start..].find('"') else {
            trace!("Unterminated {} attribute in '{}'", key, section);
            break;
        };
        let value_end = value_start + close;
        spans.push(AttributeSpan {
            start,
            end: value_end + 1,
            value_start,
            value_end,
        });
        search_from = value_end + 1;
    }

    spans
}

/// First non-empty value of `key` in `section`
pub fn attribute_value<'a>(section: &'a str, key: &str) -> Option<&'a str> {
    attribute_spans(section, key)
        .into_iter()
        .map(|span| &section[span.value_start..span.value_end])
        .find(|value| !value.is_empty())
}

/// Parse playlist text into channel records, preserving source order
pub fn parse_playlist(content: &str) -> ParsedPlaylist {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    let mut parsed = ParsedPlaylist::default();

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if !line.starts_with(EXTINF_MARKER) {
            index += 1;
            continue;
        }

        let address = lines.get(index + 1).map(|l| l.trim()).unwrap_or_default();
        index += 2;

        match parse_entry(line, address) {
            Some(record) => parsed.records.push(record),
            None => {
                parsed.dropped += 1;
                debug!("Dropping header at line {}: '{}'", index - 1, line);
            }
        }
    }

    debug!(
        "Parsed {} channel records ({} headers dropped)",
        parsed.records.len(),
        parsed.dropped
    );
    parsed
}

/// Build a record from one header and its address line
///
/// Returns `None` when the header has no final comma or a malformed marker.
pub fn parse_entry(header: &str, address: &str) -> Option<ChannelRecord> {
    let parts = HeaderParts::split(header)?;

    let country_code = attribute_value(parts.attributes, COUNTRY_ATTRIBUTE)
        .and_then(|codes| codes.split(';').next())
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let original_category = attribute_value(parts.attributes, GROUP_ATTRIBUTE)
        .unwrap_or_default()
        .to_string();

    Some(ChannelRecord {
        raw_header: header.to_string(),
        stream_address: address.to_string(),
        display_name: parts.name.trim().to_string(),
        country_code,
        original_category,
    })
}

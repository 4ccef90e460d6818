use lazy_static::lazy_static;
use regex::Regex;

use crate::outline::Heading;
use crate::utils::error::BoxResult;

lazy_static! {
    static ref MD_HEADING_REGEX: Regex = Regex::new(r"(?m)^(#{2,6})\s+(.+?)\s*$").unwrap();
    static ref MD_ID_REGEX: Regex = Regex::new(r"\s*\{#([^}\s]+)\}$").unwrap();
}

/// Extract ATX headings (`##` through `######`) from Markdown source.
///
/// An explicit `{#id}` attribute at the end of the heading line supplies
/// the anchor id; headings without one get `id: None` and are excluded
/// from the outline downstream, same as unidentified HTML headings.
pub fn extract_markdown_headings(markdown: &str) -> BoxResult<Vec<Heading>> {
    let mut headings = Vec::new();

    for cap in MD_HEADING_REGEX.captures_iter(markdown) {
        let level = cap[1].len();
        let raw = cap[2].trim();

        let (text, id) = match MD_ID_REGEX.captures(raw) {
            Some(id_cap) => {
                let id = id_cap[1].to_string();
                let text = MD_ID_REGEX.replace(raw, "").trim().to_string();
                (text, Some(id))
            }
            None => (raw.to_string(), None),
        };

        headings.push(Heading { level, id, text });
    }

    Ok(headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_markdown_headings() {
        let markdown = "# Title\n\n## Overview {#overview}\n\nText.\n\n### Details {#details}\n";
        let headings = extract_markdown_headings(markdown).unwrap();

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].id.as_deref(), Some("overview"));
        assert_eq!(headings[0].text, "Overview");
        assert_eq!(headings[1].level, 3);
    }

    #[test]
    fn test_heading_without_id_attribute() {
        let markdown = "## No Anchor Here\n";
        let headings = extract_markdown_headings(markdown).unwrap();

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].id, None);
        assert_eq!(headings[0].text, "No Anchor Here");
    }

    #[test]
    fn test_top_level_heading_is_excluded() {
        let markdown = "# Document Title {#title}\n\nBody text.\n";
        assert!(extract_markdown_headings(markdown).unwrap().is_empty());
    }
}

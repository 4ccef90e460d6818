use lazy_static::lazy_static;
use regex::Regex;

use crate::outline::Heading;
use crate::utils::error::BoxResult;

lazy_static! {
    static ref HEADING_REGEX: Regex =
        Regex::new(r#"(?is)<h([2-6])(\s[^>]*)?>(.*?)</h[2-6]\s*>"#).unwrap();
    static ref ID_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\bid\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Extract `<h2>`–`<h6>` headings from rendered HTML, in document order.
///
/// `<h1>` is the page title and is not part of the outline. A heading
/// without an `id` attribute is recorded with `id: None` so that it keeps
/// its position in the sequence.
pub fn extract_headings(html: &str) -> BoxResult<Vec<Heading>> {
    let mut headings = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let level: usize = cap[1].parse()?;
        let id = cap
            .get(2)
            .and_then(|attrs| ID_ATTR_REGEX.captures(attrs.as_str()))
            .and_then(|attr| {
                attr.get(1)
                    .or_else(|| attr.get(2))
                    .map(|m| m.as_str().to_string())
            });
        let text = strip_html_tags(&cap[3]);

        headings.push(Heading {
            level,
            id: id.filter(|s| !s.is_empty()),
            text,
        });
    }

    Ok(headings)
}

/// Strip inner markup and decode entities, leaving plain text
fn strip_html_tags(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, "");
    html_escape::decode_html_entities(stripped.trim()).to_string()
}

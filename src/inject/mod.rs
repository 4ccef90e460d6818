use regex::Regex;

use crate::utils::error::{BoxResult, RustocError};

/// Insert rendered outline markup into the document's container element.
///
/// The container is the element carrying the well-known id (`"toc"` by
/// default). It must exist and be empty: the outline is built exactly
/// once per document, and a populated container means the document was
/// already processed. The outline is fully constructed before any of the
/// document text is rewritten.
pub fn inject_toc(html: &str, toc_markup: &str, container_id: &str) -> BoxResult<String> {
    let open_regex = Regex::new(&format!(
        r#"(?i)<([A-Za-z][A-Za-z0-9]*)\b[^>]*\bid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(container_id)
    ))?;

    let caps = open_regex.captures(html).ok_or_else(|| {
        RustocError::Document(format!("no element with id \"{}\" found", container_id))
    })?;
    let open_end = match caps.get(0) {
        Some(m) => m.end(),
        None => unreachable!("capture group 0 spans the whole match"),
    };
    let tag = caps[1].to_lowercase();

    let close_regex = Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(&tag)))?;
    let rest = &html[open_end..];
    let close_offset = close_regex
        .find(rest)
        .map(|m| m.start())
        .ok_or_else(|| {
            RustocError::Document(format!("container \"{}\" is never closed", container_id))
        })?;

    let inner = &rest[..close_offset];
    if !inner.trim().is_empty() {
        return Err(RustocError::Document(format!(
            "container \"{}\" is not empty; refusing to inject twice",
            container_id
        ))
        .into());
    }

    let mut out = String::with_capacity(html.len() + toc_markup.len() + 1);
    out.push_str(&html[..open_end]);
    out.push('\n');
    out.push_str(toc_markup);
    out.push_str(&html[open_end + close_offset..]);
    Ok(out)
}

use serde::{Deserialize, Serialize};

/// A heading as it appears in the source document, in document order.
///
/// `level` is the numeric rank (2 for `<h2>` through 6 for `<h6>`). A
/// heading without an `id` attribute still occupies its position in the
/// sequence but never produces an outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub id: Option<String>,
    pub text: String,
}

/// A single entry in the generated outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub label: String,
    pub anchor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(label: String, id: &str) -> Self {
        Self {
            label,
            anchor: format!("#{}", id),
            children: Vec::new(),
        }
    }
}

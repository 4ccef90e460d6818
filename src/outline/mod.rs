mod builder;
mod types;

pub use builder::{build_flat_outline, build_outline};
pub use types::{Heading, OutlineNode};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which of the two outline shapes to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineMode {
    /// Full recursive structure mirroring the heading hierarchy
    Nested,
    /// One unnested list, one entry per identified heading
    Flat,
}

impl FromStr for OutlineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" => Ok(OutlineMode::Nested),
            "flat" => Ok(OutlineMode::Flat),
            other => Err(format!(
                "unknown outline mode '{}' (expected 'nested' or 'flat')",
                other
            )),
        }
    }
}

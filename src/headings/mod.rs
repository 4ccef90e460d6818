mod html;
mod markdown;

pub use html::extract_headings;
pub use markdown::extract_markdown_headings;

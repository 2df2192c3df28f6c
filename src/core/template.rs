//! Base page template with a single insertion point.
//!
//! The insertion point is the first `<div>` in document order. Generated
//! fragments are appended after its existing children.

use crate::core::markup::Element;
use crate::utils::error::{MenuError, Result};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    /// Byte offset of the insertion point's closing `</div>`.
    insert_at: usize,
}

/// Comments and raw-text element bodies are matched whole so nothing inside
/// them is read as a tag. Quoted attribute values are consumed with their tag.
const TOKEN_PATTERN: &str = r#"(?is)<!--.*?-->|<script\b(?:"[^"]*"|'[^']*'|[^'">])*>.*?</script\s*>|<style\b(?:"[^"]*"|'[^']*'|[^'">])*>.*?</style\s*>|<textarea\b(?:"[^"]*"|'[^']*'|[^'">])*>.*?</textarea\s*>|<(?P<close>/)?(?P<name>[a-z][a-z0-9-]*)(?:"[^"]*"|'[^']*'|[^'">])*>"#;

impl Template {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let token_re = Regex::new(TOKEN_PATTERN).map_err(|e| MenuError::template(e.to_string()))?;

        let mut depth = 0usize;
        let mut opened = false;
        let mut insert_at = None;

        for caps in token_re.captures_iter(&source) {
            let Some(name) = caps.name("name") else { continue };
            if !name.as_str().eq_ignore_ascii_case("div") {
                continue;
            }
            let closing = caps.name("close").is_some();

            if !opened {
                if closing {
                    continue;
                }
                opened = true;
                depth = 1;
                continue;
            }

            if closing {
                depth -= 1;
                if depth == 0 {
                    insert_at = caps.get(0).map(|tag| tag.start());
                    break;
                }
            } else {
                depth += 1;
            }
        }

        if !opened {
            return Err(MenuError::template("no <div> insertion point found"));
        }
        let insert_at =
            insert_at.ok_or_else(|| MenuError::template("the insertion point <div> is never closed"))?;

        Ok(Self { source, insert_at })
    }

    /// Full document with `fragments` appended to the insertion point.
    pub fn render(&self, fragments: &[Element]) -> String {
        let (head, tail) = self.source.split_at(self.insert_at);
        let mut out = String::with_capacity(self.source.len() + fragments.len() * 256);
        out.push_str(head);
        for fragment in fragments {
            out.push('\n');
            out.push_str(&fragment.to_html());
        }
        if !fragments.is_empty() {
            out.push('\n');
        }
        out.push_str(tail);
        out
    }
}

// File: crates/burnup-core/src/selector.rs
// Summary: Minimal CSS selector subset: `tag.class.class` compounds joined by descendant combinators.

use crate::error::ChartError;

/// One compound: optional tag name plus required class tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    pub fn matches(&self, tag: &str, class_attr: Option<&str>) -> bool {
        if let Some(t) = &self.tag {
            if !t.eq_ignore_ascii_case(tag) { return false; }
        }
        let have = class_attr.unwrap_or("");
        self.classes.iter().all(|c| have.split_whitespace().any(|h| h == c))
    }
}

/// Descendant-combinator chain, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, ChartError> {
        let err = |reason| ChartError::Selector { selector: source.to_string(), reason };
        let mut parts = Vec::new();
        for token in source.split_whitespace() {
            if token.contains(&['>', '+', '~', '#', '[', ':'][..]) {
                return Err(err("only tag, class and descendant selectors are supported"));
            }
            let mut pieces = token.split('.');
            let head = pieces.next().unwrap_or("");
            let tag = match head {
                "" | "*" => None,
                t => Some(t.to_string()),
            };
            let mut classes = Vec::new();
            for c in pieces {
                if c.is_empty() { return Err(err("empty class name")); }
                classes.push(c.to_string());
            }
            parts.push(Compound { tag, classes });
        }
        if parts.is_empty() {
            return Err(err("empty selector"));
        }
        Ok(Self { source: source.to_string(), parts })
    }

    pub fn as_str(&self) -> &str { &self.source }

    /// Innermost compound (matched against the candidate itself).
    pub fn subject(&self) -> &Compound {
        // parse() guarantees at least one part
        &self.parts[self.parts.len() - 1]
    }

    /// Compounds that must match ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.parts.iter().rev().skip(1)
    }
}

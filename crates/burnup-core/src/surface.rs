// File: crates/burnup-core/src/surface.rs
// Summary: Host graphics surface abstraction (element tree with selector queries).

use std::fmt::Debug;

use crate::selector::Selector;

/// Element to be created on a surface: tag name plus ordered attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new() }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// A mutable element tree the projector reads chart geometry from and
/// draws overlays into. Node handles are cheap copies.
pub trait Surface {
    type Node: Copy + Eq + Debug;

    fn root(&self) -> Self::Node;
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    /// Local tag name; `None` for non-element nodes.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
    fn append_child(&mut self, parent: Self::Node, element: Element) -> Self::Node;
    /// Detach `node` from the tree. Removing a detached node is a no-op.
    /// The surface may hand the same handle out again afterwards.
    fn remove(&mut self, node: Self::Node);

    fn matches(&self, node: Self::Node, selector: &Selector) -> bool {
        let Some(tag) = self.tag_name(node) else { return false };
        if !selector.subject().matches(tag, self.attribute(node, "class")) {
            return false;
        }
        let mut cursor = self.parent(node);
        for wanted in selector.ancestors() {
            loop {
                let Some(anc) = cursor else { return false };
                cursor = self.parent(anc);
                if let Some(t) = self.tag_name(anc) {
                    if wanted.matches(t, self.attribute(anc, "class")) {
                        break;
                    }
                }
            }
        }
        true
    }

    /// Descendants of `scope` (whole tree when `None`) matching `selector`,
    /// in document order.
    fn query_all(&self, scope: Option<Self::Node>, selector: &Selector) -> Vec<Self::Node> {
        let start = scope.unwrap_or_else(|| self.root());
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(start).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if self.matches(node, selector) {
                out.push(node);
            }
            stack.extend(self.children(node).into_iter().rev());
        }
        out
    }

    fn query(&self, scope: Option<Self::Node>, selector: &Selector) -> Option<Self::Node> {
        self.query_all(scope, selector).into_iter().next()
    }
}

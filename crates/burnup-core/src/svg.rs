// File: crates/burnup-core/src/svg.rs
// Summary: Owned, mutable SVG/XHTML tree loaded via roxmltree; implements `Surface` and serializes back to XML.

use std::fmt::Write as _;

use crate::error::ChartError;
use crate::surface::{Element, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
    Document,
    Element { name: String, attributes: Vec<(String, String)> },
    Text(String),
    Comment(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document. Removing a node releases its slot and those of
/// its descendants for reuse, so a handle is dead once removed.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    nodes: Vec<NodeData>,
    free: Vec<NodeId>,
}

impl SvgDocument {
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let opts = roxmltree::ParsingOptions { allow_dtd: true, ..Default::default() };
        let source = roxmltree::Document::parse_with_options(text, opts)?;
        let mut doc = Self {
            nodes: vec![NodeData { kind: NodeKind::Document, parent: None, children: Vec::new() }],
            free: Vec::new(),
        };
        let root = doc.root();
        for child in source.root().children() {
            doc.copy_from(root, child);
        }
        Ok(doc)
    }

    fn copy_from(&mut self, parent: NodeId, src: roxmltree::Node<'_, '_>) {
        let kind = match src.node_type() {
            roxmltree::NodeType::Element => NodeKind::Element {
                name: qualified_tag(src),
                attributes: source_attributes(src),
            },
            roxmltree::NodeType::Text => NodeKind::Text(src.text().unwrap_or_default().to_string()),
            roxmltree::NodeType::Comment => NodeKind::Comment(src.text().unwrap_or_default().to_string()),
            roxmltree::NodeType::Root | roxmltree::NodeType::PI => return,
        };
        let id = self.push(parent, kind);
        for child in src.children() {
            self.copy_from(id, child);
        }
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let data = NodeData { kind, parent: Some(parent), children: Vec::new() };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = data;
                id
            }
            None => {
                self.nodes.push(data);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Return a detached subtree's slots to the free list.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id.0];
            stack.append(&mut node.children);
            node.parent = None;
            node.kind = NodeKind::Text(String::new());
            self.free.push(id);
        }
    }

    /// Arena slots in use or waiting for reuse.
    pub fn node_slots(&self) -> usize {
        self.nodes.len()
    }

    /// Serialize the reachable tree.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        for &child in &self.nodes[0].children {
            self.write_node(&mut out, child);
        }
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Document => {}
            NodeKind::Text(t) => out.push_str(&escape(t, false)),
            NodeKind::Comment(c) => { let _ = write!(out, "<!--{c}-->"); }
            NodeKind::Element { name, attributes } => {
                out.push('<');
                out.push_str(name);
                for (k, v) in attributes {
                    let _ = write!(out, " {}=\"{}\"", k, escape(v, true));
                }
                if node.children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for &child in &node.children {
                        self.write_node(out, child);
                    }
                    let _ = write!(out, "</{name}>");
                }
            }
        }
    }

    /// Number of elements reachable from the root.
    pub fn element_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if matches!(self.nodes[id.0].kind, NodeKind::Element { .. }) {
                count += 1;
            }
            stack.extend(self.nodes[id.0].children.iter().copied());
        }
        count
    }

    fn attributes_mut(&mut self, id: NodeId) -> Option<&mut Vec<(String, String)>> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }
}

impl std::str::FromStr for SvgDocument {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl Surface for SvgDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId { NodeId(0) }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.clone()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { name, .. } => Some(name.rsplit(':').next().unwrap_or(name)),
            _ => None,
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(attrs) = self.attributes_mut(node) else { return };
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        self.push(parent, NodeKind::Element { name: element.name, attributes: element.attributes })
    }

    fn remove(&mut self, node: NodeId) {
        let Some(parent) = self.nodes[node.0].parent.take() else { return };
        self.nodes[parent.0].children.retain(|&c| c != node);
        self.release(node);
    }
}

fn qualified_tag(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    prefixed(node, tag.namespace(), tag.name())
}

fn prefixed(node: roxmltree::Node<'_, '_>, ns: Option<&str>, local: &str) -> String {
    match ns.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Namespace declarations introduced by this element, then its own attributes.
fn source_attributes(node: roxmltree::Node<'_, '_>) -> Vec<(String, String)> {
    let inherited: Vec<(Option<&str>, &str)> = match node.parent_element() {
        Some(p) => p.namespaces().map(|ns| (ns.name(), ns.uri())).collect(),
        None => Vec::new(),
    };
    let mut out = Vec::new();
    for ns in node.namespaces() {
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let key = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        out.push((key, ns.uri().to_string()));
    }
    // declaration order is not preserved by the parser; keep output stable
    out.sort();
    for attr in node.attributes() {
        out.push((prefixed(node, attr.namespace(), attr.name()), attr.value().to_string()));
    }
    out
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

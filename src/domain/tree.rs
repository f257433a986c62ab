/// Arena-backed AST storage.
///
/// Nodes live in a flat `Vec` in pre-order (document order). A parent owns its
/// children through the id list; the parent link is a plain index and never
/// affects lifetime.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::kind::NodeKind;
use super::node::NodeRef;
use super::views::NodeView;
use super::width::WidthOracle;

/// Position of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A decoded node. Read through `NodeRef`.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) raw_id: String,
    pub(crate) kind: NodeKind,
    /// Every raw field except `id`, `kind` and the children list.
    pub(crate) attrs: Map<String, Value>,
    /// `None` for leaves (no children field, or an empty one).
    pub(crate) children: Option<Vec<NodeId>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: usize,
    pub(crate) view: NodeView,
}

#[derive(Debug, Clone)]
pub struct AstTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_raw_id: HashMap<String, NodeId>,
    pub(crate) oracle: WidthOracle,
}

impl AstTree {
    pub(crate) fn new(oracle: WidthOracle) -> Self {
        Self {
            nodes: Vec::new(),
            by_raw_id: HashMap::new(),
            oracle,
        }
    }

    /// The translation unit (or whatever record the dump started at).
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId(0))
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Resolve a source-supplied identifier (e.g. a `referencedDecl.id`).
    pub fn find(&self, raw_id: &str) -> Option<NodeRef<'_>> {
        self.by_raw_id.get(raw_id).map(|&id| NodeRef::new(self, id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn oracle(&self) -> &WidthOracle {
        &self.oracle
    }

    /// All nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef::new(self, NodeId(i)))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.0].children.as_deref().unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        if self.by_raw_id.contains_key(&node.raw_id) {
            tracing::debug!(raw_id = %node.raw_id, "duplicate node id, keeping first");
        } else {
            self.by_raw_id.insert(node.raw_id.clone(), id);
        }
        self.nodes.push(node);
        id
    }

    /// Drop every node allocated at or after `mark`.
    pub(crate) fn truncate(&mut self, mark: usize) {
        self.nodes.truncate(mark);
        self.by_raw_id.retain(|_, id| id.0 < mark);
    }
}

//! Node Handle
//!
//! `NodeRef` is the read-only query surface over a decoded node: universal
//! accessors, parent navigation, traversal shortcuts and typed views.

use std::fmt;

use serde_json::{Map, Value};

use super::kind::NodeKind;
use super::location::{Location, SourceRange};
use super::traverse;
use super::tree::{AstTree, Node, NodeId};
use super::views::{CompoundStmt, FunctionDecl, LoopStmt, NodeView, VarDecl};
use super::width::Width;

#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t AstTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t AstTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'t Node {
        self.tree.node(self.id)
    }

    pub(crate) fn view(&self) -> &'t NodeView {
        &self.node().view
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t AstTree {
        self.tree
    }

    /// The source-supplied identifier (`0x14acde0` in clang dumps).
    pub fn raw_id(&self) -> &'t str {
        &self.node().raw_id
    }

    pub fn kind(&self) -> &'t NodeKind {
        &self.node().kind
    }

    pub fn is(&self, kind: &NodeKind) -> bool {
        self.kind() == kind
    }

    /// Nesting depth; the root is 0.
    pub fn depth(&self) -> usize {
        self.node().depth
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'t>> {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    /// Nearest ancestor of the given kind.
    pub fn enclosing(&self, kind: &NodeKind) -> Option<NodeRef<'t>> {
        self.ancestors().find(|n| n.kind() == kind)
    }

    /// True when the record had no children (field absent or empty list).
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_none()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        tree.child_ids(self.id)
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    pub fn child_count(&self) -> usize {
        self.tree.child_ids(self.id).len()
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'t>> {
        self.tree
            .child_ids(self.id)
            .get(index)
            .map(|&id| NodeRef::new(self.tree, id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Side data
    // ─────────────────────────────────────────────────────────────────────

    pub fn attrs(&self) -> &'t Map<String, Value> {
        &self.node().attrs
    }

    pub fn attr(&self, name: &str) -> Option<&'t Value> {
        self.node().attrs.get(name)
    }

    pub fn name(&self) -> Option<&'t str> {
        self.attr("name").and_then(Value::as_str)
    }

    pub fn is_implicit(&self) -> bool {
        self.attr("isImplicit").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Literal payload (`value` field), kind-dependent.
    pub fn value(&self) -> Option<&'t Value> {
        self.attr("value")
    }

    /// Literal payload rendered as text: strings verbatim, numbers printed.
    pub fn value_text(&self) -> Option<String> {
        match self.value()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn location(&self) -> Option<Location> {
        self.attr("loc").and_then(Location::from_raw)
    }

    pub fn range(&self) -> Option<SourceRange> {
        self.attr("range").and_then(SourceRange::from_raw)
    }

    /// Declared type spelling: `type.qualType`, or a bare string `type`.
    pub fn declared_type(&self) -> Option<&'t str> {
        match self.attr("type")? {
            Value::String(s) => Some(s),
            Value::Object(obj) => obj.get("qualType").and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn desugared_type(&self) -> Option<&'t str> {
        self.attr("type")?
            .get("desugaredQualType")
            .and_then(Value::as_str)
    }

    /// Width of the declared type; `None` when there is no declared type.
    /// Typedef'd spellings fall back to their desugared form.
    pub fn width_in_bytes(&self) -> Option<Width> {
        let oracle = self.tree.oracle();
        let width = oracle.width_of(self.declared_type()?);
        if width.is_known() {
            return Some(width);
        }
        Some(
            self.desugared_type()
                .map(|t| oracle.width_of(t))
                .unwrap_or(Width::Unknown),
        )
    }

    /// Identifier of the declaration a `DeclRefExpr`/`MemberExpr` points at.
    pub fn referenced_decl_id(&self) -> Option<&'t str> {
        self.attr("referencedDecl")
            .or_else(|| self.attr("referencedMemberDecl"))
            .and_then(|v| match v {
                Value::Object(obj) => obj.get("id").and_then(Value::as_str),
                Value::String(s) => Some(s.as_str()),
                _ => None,
            })
    }

    pub fn resolve_reference(&self) -> Option<NodeRef<'t>> {
        self.tree.find(self.referenced_decl_id()?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Traversal shortcuts
    // ─────────────────────────────────────────────────────────────────────

    pub fn collect(&self, kind: &NodeKind, recursive: bool) -> Vec<NodeRef<'t>> {
        traverse::collect(*self, kind, recursive)
    }

    pub fn collect_where<P>(&self, kind: &NodeKind, recursive: bool, predicate: P) -> Vec<NodeRef<'t>>
    where
        P: FnMut(&[NodeRef<'t>], NodeRef<'t>) -> bool,
    {
        traverse::collect_where(*self, kind, recursive, predicate)
    }

    pub fn collect_first(&self, kind: &NodeKind) -> Option<NodeRef<'t>> {
        traverse::collect_first(*self, kind)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Typed views
    // ─────────────────────────────────────────────────────────────────────

    pub fn as_function(&self) -> Option<FunctionDecl<'t>> {
        FunctionDecl::from_node(*self)
    }

    pub fn as_compound(&self) -> Option<CompoundStmt<'t>> {
        CompoundStmt::from_node(*self)
    }

    pub fn as_loop(&self) -> Option<LoopStmt<'t>> {
        LoopStmt::from_node(*self)
    }

    pub fn as_var_decl(&self) -> Option<VarDecl<'t>> {
        VarDecl::from_node(*self)
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{} {}", "\t".repeat(depth), self.raw_id(), self.kind())?;
        for child in self.children() {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.raw_id())
            .field("kind", &self.kind().as_str())
            .finish()
    }
}

/// Indented `id kind` dump of the subtree.
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

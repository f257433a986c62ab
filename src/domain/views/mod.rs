//! Derived Views
//!
//! Per-kind summaries computed once, right after a node and its whole subtree
//! have been decoded. `build_view` is the kind dispatch table; kinds without a
//! specialization get `NodeView::Plain`.

mod compound;
mod function;
mod loops;
mod var_decl;

pub use compound::{CompoundStmt, CompoundView};
pub use function::{FunctionDecl, FunctionView};
pub use loops::{LoopBounds, LoopConfidence, LoopStmt, LoopView};
pub use var_decl::VarDecl;

use super::kind::NodeKind;
use super::node::NodeRef;
use super::tree::NodeId;

#[derive(Debug, Clone, Default)]
pub enum NodeView {
    #[default]
    Plain,
    Function(FunctionView),
    Compound(CompoundView),
    Loop(LoopView),
}

/// Compute the derived view for a fully decoded node.
pub(crate) fn build_view(node: NodeRef<'_>) -> NodeView {
    match node.kind() {
        NodeKind::FunctionDecl => NodeView::Function(FunctionView::build(node)),
        NodeKind::CompoundStmt => NodeView::Compound(CompoundView::build(node)),
        kind if kind.is_loop() => NodeView::Loop(LoopView::build(node)),
        _ => NodeView::Plain,
    }
}

fn ids(nodes: Vec<NodeRef<'_>>) -> Vec<NodeId> {
    nodes.into_iter().map(|n| n.id()).collect()
}

fn refs<'t>(anchor: NodeRef<'t>, ids: &'t [NodeId]) -> impl Iterator<Item = NodeRef<'t>> + 't {
    let tree = anchor.tree();
    ids.iter().map(move |&id| NodeRef::new(tree, id))
}

use super::{ids, refs, LoopStmt, NodeView, VarDecl};
use crate::domain::error::{pick, LookupError};
use crate::domain::kind::NodeKind;
use crate::domain::node::NodeRef;
use crate::domain::tree::NodeId;

/// Declarations, nested loops and calls of a `CompoundStmt`.
#[derive(Debug, Clone, Default)]
pub struct CompoundView {
    /// Direct `DeclStmt`s holding exactly one `VarDecl`, collapsed to it.
    pub(crate) var_decls: Vec<NodeId>,
    pub(crate) for_loops: Vec<NodeId>,
    pub(crate) while_loops: Vec<NodeId>,
    pub(crate) do_loops: Vec<NodeId>,
    pub(crate) calls: Vec<NodeId>,
}

impl CompoundView {
    pub(crate) fn build(node: NodeRef<'_>) -> Self {
        let single_decls = node.collect_where(&NodeKind::DeclStmt, false, |_, stmt| {
            stmt.collect(&NodeKind::VarDecl, false).len() == 1
        });
        let var_decls = single_decls
            .into_iter()
            .filter_map(|stmt| stmt.collect_first(&NodeKind::VarDecl))
            .map(|decl| decl.id())
            .collect();

        Self {
            var_decls,
            for_loops: ids(node.collect(&NodeKind::ForStmt, true)),
            while_loops: ids(node.collect(&NodeKind::WhileStmt, true)),
            do_loops: ids(node.collect(&NodeKind::DoStmt, true)),
            calls: ids(node.collect(&NodeKind::CallExpr, true)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompoundStmt<'t> {
    node: NodeRef<'t>,
    view: &'t CompoundView,
}

impl<'t> CompoundStmt<'t> {
    pub(crate) fn from_node(node: NodeRef<'t>) -> Option<Self> {
        match node.view() {
            NodeView::Compound(view) => Some(Self { node, view }),
            _ => None,
        }
    }

    pub fn node(&self) -> NodeRef<'t> {
        self.node
    }

    fn at(&self, list: &[NodeId], index: usize, what: &'static str) -> Result<NodeRef<'t>, LookupError> {
        pick(list, index, what).map(|id| NodeRef::new(self.node.tree(), id))
    }

    fn loop_at(&self, list: &[NodeId], index: usize, what: &'static str) -> Result<LoopStmt<'t>, LookupError> {
        let node = self.at(list, index, what)?;
        // Loop kinds always carry a loop view.
        node.as_loop().ok_or(LookupError::Empty { list: what })
    }

    pub fn var_decls(&self) -> impl Iterator<Item = VarDecl<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.var_decls).filter_map(|n| n.as_var_decl())
    }

    pub fn var_decl_count(&self) -> usize {
        self.view.var_decls.len()
    }

    pub fn var_decl(&self, index: usize) -> Result<VarDecl<'t>, LookupError> {
        let node = self.at(&self.view.var_decls, index, "variable declarations")?;
        node.as_var_decl()
            .ok_or(LookupError::Empty { list: "variable declarations" })
    }

    pub fn for_loops(&self) -> impl Iterator<Item = LoopStmt<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.for_loops).filter_map(|n| n.as_loop())
    }

    pub fn for_loop(&self, index: usize) -> Result<LoopStmt<'t>, LookupError> {
        self.loop_at(&self.view.for_loops, index, "for loops")
    }

    pub fn while_loops(&self) -> impl Iterator<Item = LoopStmt<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.while_loops).filter_map(|n| n.as_loop())
    }

    pub fn while_loop(&self, index: usize) -> Result<LoopStmt<'t>, LookupError> {
        self.loop_at(&self.view.while_loops, index, "while loops")
    }

    pub fn do_loops(&self) -> impl Iterator<Item = LoopStmt<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.do_loops).filter_map(|n| n.as_loop())
    }

    pub fn do_loop(&self, index: usize) -> Result<LoopStmt<'t>, LookupError> {
        self.loop_at(&self.view.do_loops, index, "do loops")
    }

    pub fn calls(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.calls)
    }

    pub fn call(&self, index: usize) -> Result<NodeRef<'t>, LookupError> {
        self.at(&self.view.calls, index, "calls")
    }
}

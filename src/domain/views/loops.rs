use super::{ids, refs, CompoundStmt, NodeView};
use crate::domain::error::{pick, LookupError};
use crate::domain::kind::NodeKind;
use crate::domain::node::NodeRef;
use crate::domain::tree::NodeId;

/// Init, condition and step clauses of a basic counted `for` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopBounds {
    pub lower: NodeId,
    pub upper: NodeId,
    pub step: NodeId,
}

/// How closely a basic counted loop's clauses resemble a counting idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopConfidence {
    High,
    Low,
}

/// Body-derived facts of a `for`/`while`/`do` loop.
#[derive(Debug, Clone, Default)]
pub struct LoopView {
    /// Set only for `for` loops with exactly four children.
    pub(crate) bounds: Option<LoopBounds>,
    pub(crate) body: Option<NodeId>,
    pub(crate) var_decls: Vec<NodeId>,
    pub(crate) calls: Vec<NodeId>,
    /// `break` statements directly in the body.
    pub(crate) breaks: Vec<NodeId>,
}

impl LoopView {
    pub(crate) fn build(node: NodeRef<'_>) -> Self {
        let body = node.collect_first(&NodeKind::CompoundStmt);

        // init, cond, inc, body: clang's empty condition-variable slot is a
        // placeholder and never reaches the tree.
        let bounds = match (node.kind(), node.child_count()) {
            (NodeKind::ForStmt, 4) => match (node.child(0), node.child(1), node.child(2)) {
                (Some(lower), Some(upper), Some(step)) => Some(LoopBounds {
                    lower: lower.id(),
                    upper: upper.id(),
                    step: step.id(),
                }),
                _ => None,
            },
            _ => None,
        };

        match body {
            Some(body) => Self {
                bounds,
                body: Some(body.id()),
                var_decls: ids(body.collect(&NodeKind::VarDecl, true)),
                calls: ids(body.collect(&NodeKind::CallExpr, true)),
                breaks: ids(body.collect(&NodeKind::BreakStmt, false)),
            },
            None => Self {
                bounds,
                ..Self::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoopStmt<'t> {
    node: NodeRef<'t>,
    view: &'t LoopView,
}

impl<'t> LoopStmt<'t> {
    pub(crate) fn from_node(node: NodeRef<'t>) -> Option<Self> {
        match node.view() {
            NodeView::Loop(view) => Some(Self { node, view }),
            _ => None,
        }
    }

    pub fn node(&self) -> NodeRef<'t> {
        self.node
    }

    pub fn kind(&self) -> &'t NodeKind {
        self.node.kind()
    }

    fn get(&self, id: NodeId) -> NodeRef<'t> {
        NodeRef::new(self.node.tree(), id)
    }

    /// Structural heuristic: a `for` loop with exactly four direct children.
    /// The clauses are not checked to form a counting idiom; see
    /// `confidence` for that.
    pub fn is_basic_loop(&self) -> bool {
        self.view.bounds.is_some()
    }

    pub fn lower_bound(&self) -> Option<NodeRef<'t>> {
        self.view.bounds.map(|b| self.get(b.lower))
    }

    pub fn upper_bound(&self) -> Option<NodeRef<'t>> {
        self.view.bounds.map(|b| self.get(b.upper))
    }

    pub fn step(&self) -> Option<NodeRef<'t>> {
        self.view.bounds.map(|b| self.get(b.step))
    }

    /// `None` unless the loop is basic.
    pub fn confidence(&self) -> Option<LoopConfidence> {
        let bounds = self.view.bounds?;
        let init_ok = matches!(
            self.get(bounds.lower).kind(),
            NodeKind::DeclStmt | NodeKind::BinaryOperator
        );
        let cond_ok = matches!(self.get(bounds.upper).kind(), NodeKind::BinaryOperator);
        let step_ok = matches!(
            self.get(bounds.step).kind(),
            NodeKind::UnaryOperator | NodeKind::CompoundAssignOperator | NodeKind::BinaryOperator
        );
        let body_ok = self.view.body.is_some();

        Some(if init_ok && cond_ok && step_ok && body_ok {
            LoopConfidence::High
        } else {
            LoopConfidence::Low
        })
    }

    pub fn body(&self) -> Option<CompoundStmt<'t>> {
        self.view.body.and_then(|id| self.get(id).as_compound())
    }

    pub fn var_decls(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.var_decls)
    }

    pub fn var_decl(&self, index: usize) -> Result<NodeRef<'t>, LookupError> {
        pick(&self.view.var_decls, index, "variable declarations").map(|id| self.get(id))
    }

    pub fn calls(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.calls)
    }

    pub fn call(&self, index: usize) -> Result<NodeRef<'t>, LookupError> {
        pick(&self.view.calls, index, "calls").map(|id| self.get(id))
    }

    pub fn breaks(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.breaks)
    }

    pub fn break_count(&self) -> usize {
        self.view.breaks.len()
    }

    pub fn break_point(&self, index: usize) -> Result<NodeRef<'t>, LookupError> {
        pick(&self.view.breaks, index, "break statements").map(|id| self.get(id))
    }
}

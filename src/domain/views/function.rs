use super::{ids, refs, CompoundStmt, NodeView};
use crate::domain::error::{pick, LookupError};
use crate::domain::kind::NodeKind;
use crate::domain::node::NodeRef;
use crate::domain::tree::NodeId;

/// Parameters, body and declared type of a `FunctionDecl`.
#[derive(Debug, Clone, Default)]
pub struct FunctionView {
    pub(crate) params: Vec<NodeId>,
    /// `None` for prototypes / forward declarations.
    pub(crate) body: Option<NodeId>,
    pub(crate) signature: Option<String>,
}

impl FunctionView {
    pub(crate) fn build(node: NodeRef<'_>) -> Self {
        Self {
            params: ids(node.collect(&NodeKind::ParmVarDecl, false)),
            body: node.collect_first(&NodeKind::CompoundStmt).map(|n| n.id()),
            signature: node.declared_type().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDecl<'t> {
    node: NodeRef<'t>,
    view: &'t FunctionView,
}

impl<'t> FunctionDecl<'t> {
    pub(crate) fn from_node(node: NodeRef<'t>) -> Option<Self> {
        match node.view() {
            NodeView::Function(view) => Some(Self { node, view }),
            _ => None,
        }
    }

    pub fn node(&self) -> NodeRef<'t> {
        self.node
    }

    pub fn name(&self) -> Option<&'t str> {
        self.node.name()
    }

    pub fn params(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let view = self.view;
        refs(self.node, &view.params)
    }

    pub fn param_count(&self) -> usize {
        self.view.params.len()
    }

    pub fn param(&self, index: usize) -> Result<NodeRef<'t>, LookupError> {
        pick(&self.view.params, index, "parameters").map(|id| NodeRef::new(self.node.tree(), id))
    }

    pub fn body(&self) -> Option<CompoundStmt<'t>> {
        self.view
            .body
            .and_then(|id| NodeRef::new(self.node.tree(), id).as_compound())
    }

    /// A definition has a body; a prototype does not.
    pub fn is_definition(&self) -> bool {
        self.view.body.is_some()
    }

    /// The declared function type verbatim, e.g. `"int (int, char *)"`.
    pub fn return_type(&self) -> Option<&'t str> {
        self.view.signature.as_deref()
    }

    /// The result type alone: the declared type up to its parameter list.
    pub fn result_type(&self) -> Option<&'t str> {
        let signature = self.return_type()?;
        Some(match signature.find('(') {
            Some(pos) => signature[..pos].trim_end(),
            None => signature,
        })
    }
}

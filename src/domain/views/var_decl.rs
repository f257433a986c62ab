use crate::domain::kind::NodeKind;
use crate::domain::node::NodeRef;
use crate::domain::width::Width;

/// Typed handle over a `VarDecl` (or `ParmVarDecl`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarDecl<'t> {
    node: NodeRef<'t>,
}

impl<'t> VarDecl<'t> {
    pub(crate) fn from_node(node: NodeRef<'t>) -> Option<Self> {
        matches!(node.kind(), NodeKind::VarDecl | NodeKind::ParmVarDecl).then_some(Self { node })
    }

    pub fn node(&self) -> NodeRef<'t> {
        self.node
    }

    pub fn name(&self) -> Option<&'t str> {
        self.node.name()
    }

    pub fn declared_type(&self) -> Option<&'t str> {
        self.node.declared_type()
    }

    pub fn width(&self) -> Option<Width> {
        self.node.width_in_bytes()
    }

    pub fn is_const(&self) -> bool {
        self.declared_type()
            .map(|t| t.split_whitespace().any(|w| w == "const"))
            .unwrap_or(false)
    }

    /// The initializer expression, if the declaration has one.
    pub fn initializer(&self) -> Option<NodeRef<'t>> {
        self.node
            .children()
            .find(|c| c.kind().is_expression())
    }

    /// Literal value of the initializer, looking through implicit casts and
    /// parentheses (`int x = (0);` yields `"0"`).
    pub fn initial_value(&self) -> Option<String> {
        let mut expr = self.initializer()?;
        loop {
            if let Some(text) = expr.value_text() {
                return Some(text);
            }
            match expr.kind() {
                NodeKind::ImplicitCastExpr | NodeKind::ParenExpr | NodeKind::CStyleCastExpr => {
                    expr = expr.child(0)?;
                }
                _ => return None,
            }
        }
    }
}

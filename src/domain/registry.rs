use crate::domain::kind::NodeKind;
use crate::domain::tree::NodeId;

/// Per-parse flat index of the tracked kinds, in document order.
///
/// A registry is created empty for every decode call and owned by the
/// resulting `ParsedUnit`; it is never shared between parses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRegistry {
    pub(crate) functions: Vec<NodeId>,
    pub(crate) compounds: Vec<NodeId>,
    pub(crate) for_loops: Vec<NodeId>,
    pub(crate) while_loops: Vec<NodeId>,
    pub(crate) do_loops: Vec<NodeId>,
}

impl SessionRegistry {
    /// Record a node if its kind is tracked. Untracked kinds are ignored.
    pub(crate) fn register(&mut self, kind: &NodeKind, id: NodeId) {
        let list = match kind {
            NodeKind::FunctionDecl => &mut self.functions,
            NodeKind::CompoundStmt => &mut self.compounds,
            NodeKind::ForStmt => &mut self.for_loops,
            NodeKind::WhileStmt => &mut self.while_loops,
            NodeKind::DoStmt => &mut self.do_loops,
            _ => return,
        };
        list.push(id);
    }

    /// Forget every entry for nodes allocated at or after `mark`.
    pub(crate) fn rollback(&mut self, mark: usize) {
        for list in [
            &mut self.functions,
            &mut self.compounds,
            &mut self.for_loops,
            &mut self.while_loops,
            &mut self.do_loops,
        ] {
            while list.last().is_some_and(|id| id.0 >= mark) {
                list.pop();
            }
        }
    }

    pub fn functions(&self) -> &[NodeId] {
        &self.functions
    }

    pub fn compounds(&self) -> &[NodeId] {
        &self.compounds
    }

    pub fn for_loops(&self) -> &[NodeId] {
        &self.for_loops
    }

    pub fn while_loops(&self) -> &[NodeId] {
        &self.while_loops
    }

    pub fn do_loops(&self) -> &[NodeId] {
        &self.do_loops
    }

    pub fn total(&self) -> usize {
        self.functions.len()
            + self.compounds.len()
            + self.for_loops.len()
            + self.while_loops.len()
            + self.do_loops.len()
    }
}

use super::error::{pick, DecodeError, LookupError};
use super::node::NodeRef;
use super::registry::SessionRegistry;
use super::tree::{AstTree, NodeId};
use super::views::{CompoundStmt, FunctionDecl, LoopStmt};

/// Result of decoding one dump: the tree, its session registry, and any
/// subtrees dropped under `recover_malformed`.
#[derive(Debug)]
pub struct ParsedUnit {
    pub(crate) tree: AstTree,
    pub(crate) registry: SessionRegistry,
    pub(crate) diagnostics: Vec<DecodeError>,
}

impl ParsedUnit {
    pub fn tree(&self) -> &AstTree {
        &self.tree
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.tree.root()
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Errors recovered from while decoding; empty unless recovery is on.
    pub fn diagnostics(&self) -> &[DecodeError] {
        &self.diagnostics
    }

    /// Look up a node by its source-supplied identifier.
    pub fn find(&self, raw_id: &str) -> Option<NodeRef<'_>> {
        self.tree.find(raw_id)
    }

    fn refs<'a>(&'a self, ids: &'a [NodeId]) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        ids.iter().map(move |&id| NodeRef::new(&self.tree, id))
    }

    fn at(&self, ids: &[NodeId], index: usize, list: &'static str) -> Result<NodeRef<'_>, LookupError> {
        pick(ids, index, list).map(|id| NodeRef::new(&self.tree, id))
    }

    pub fn functions(&self) -> impl Iterator<Item = FunctionDecl<'_>> {
        self.refs(&self.registry.functions).filter_map(|n| n.as_function())
    }

    pub fn function(&self, index: usize) -> Result<FunctionDecl<'_>, LookupError> {
        let node = self.at(&self.registry.functions, index, "functions")?;
        node.as_function().ok_or(LookupError::Empty { list: "functions" })
    }

    /// First function declared with this name. Definitions win over
    /// earlier prototypes.
    pub fn function_named(&self, name: &str) -> Option<FunctionDecl<'_>> {
        let mut candidates = self.functions().filter(|f| f.name() == Some(name));
        let first = candidates.next()?;
        if first.is_definition() {
            return Some(first);
        }
        Some(candidates.find(|f| f.is_definition()).unwrap_or(first))
    }

    pub fn compounds(&self) -> impl Iterator<Item = CompoundStmt<'_>> {
        self.refs(&self.registry.compounds).filter_map(|n| n.as_compound())
    }

    pub fn compound(&self, index: usize) -> Result<CompoundStmt<'_>, LookupError> {
        let node = self.at(&self.registry.compounds, index, "compound statements")?;
        node.as_compound()
            .ok_or(LookupError::Empty { list: "compound statements" })
    }

    pub fn for_loops(&self) -> impl Iterator<Item = LoopStmt<'_>> {
        self.refs(&self.registry.for_loops).filter_map(|n| n.as_loop())
    }

    pub fn for_loop(&self, index: usize) -> Result<LoopStmt<'_>, LookupError> {
        self.loop_at(&self.registry.for_loops, index, "for loops")
    }

    pub fn while_loops(&self) -> impl Iterator<Item = LoopStmt<'_>> {
        self.refs(&self.registry.while_loops).filter_map(|n| n.as_loop())
    }

    pub fn while_loop(&self, index: usize) -> Result<LoopStmt<'_>, LookupError> {
        self.loop_at(&self.registry.while_loops, index, "while loops")
    }

    pub fn do_loops(&self) -> impl Iterator<Item = LoopStmt<'_>> {
        self.refs(&self.registry.do_loops).filter_map(|n| n.as_loop())
    }

    pub fn do_loop(&self, index: usize) -> Result<LoopStmt<'_>, LookupError> {
        self.loop_at(&self.registry.do_loops, index, "do loops")
    }

    fn loop_at(&self, ids: &[NodeId], index: usize, list: &'static str) -> Result<LoopStmt<'_>, LookupError> {
        let node = self.at(ids, index, list)?;
        node.as_loop().ok_or(LookupError::Empty { list })
    }
}

//! Traversal Engine
//!
//! Kind-filtered searches over a decoded tree. Both operations are pure reads
//! and allocate a fresh result per call. Recursive search uses an explicit
//! stack, so its depth is bounded by the heap rather than the call stack.

use super::kind::NodeKind;
use super::node::NodeRef;

/// Every node of `kind` below `root` (direct children only unless
/// `recursive`), in document order.
pub fn collect<'t>(root: NodeRef<'t>, kind: &NodeKind, recursive: bool) -> Vec<NodeRef<'t>> {
    collect_where(root, kind, recursive, |_, _| true)
}

/// Like `collect`, but a matching candidate is only kept if `predicate`
/// accepts it given the results gathered so far. Recursion descends into
/// every child whether or not it matched.
pub fn collect_where<'t, P>(
    root: NodeRef<'t>,
    kind: &NodeKind,
    recursive: bool,
    mut predicate: P,
) -> Vec<NodeRef<'t>>
where
    P: FnMut(&[NodeRef<'t>], NodeRef<'t>) -> bool,
{
    let tree = root.tree();
    let mut found = Vec::new();
    let mut stack: Vec<_> = tree.child_ids(root.id()).iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let candidate = NodeRef::new(tree, id);
        if candidate.kind() == kind && predicate(&found, candidate) {
            found.push(candidate);
        }
        if recursive {
            stack.extend(tree.child_ids(id).iter().rev().copied());
        }
    }

    found
}

/// First direct child of `kind`. Never recurses.
pub fn collect_first<'t>(root: NodeRef<'t>, kind: &NodeKind) -> Option<NodeRef<'t>> {
    root.children().find(|child| child.kind() == kind)
}

/// Upper bound on how far [`find_ancestor_map`] walks before giving up on a malformed tree.
pub const MAX_ANCESTOR_DEPTH: usize = 1024;

/// Capability to look up the parent of a UI node (e.g. a DOM element or a widget id).
pub trait ParentLookup {
    type Node: Clone;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// Walks from `start` (inclusive) up through its ancestors and returns the first value `f`
/// produces.
pub fn find_ancestor_map<L: ParentLookup, T>(
    lookup: &L,
    start: L::Node,
    mut f: impl FnMut(&L::Node) -> Option<T>,
) -> Option<T> {
    let mut node = start;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if let Some(found) = f(&node) {
            return Some(found);
        }
        node = lookup.parent(&node)?;
    }
    awarn!(
        depth = MAX_ANCESTOR_DEPTH,
        "find_ancestor_map: depth limit reached"
    );
    None
}

/// Returns the closest node, starting at `start` itself, that satisfies `pred`.
pub fn closest<L: ParentLookup>(
    lookup: &L,
    start: L::Node,
    mut pred: impl FnMut(&L::Node) -> bool,
) -> Option<L::Node> {
    find_ancestor_map(lookup, start, |node| pred(node).then(|| node.clone()))
}

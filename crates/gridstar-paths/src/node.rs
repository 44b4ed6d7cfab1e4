use gridstar_core::Point;

/// Handle to a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(usize);

impl NodeId {
    #[cfg(test)]
    pub(crate) fn from_index(i: usize) -> Self {
        Self(i)
    }

    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One search record: a position reached by a particular route.
///
/// Several nodes may exist for the same position while it sits in the
/// frontier; at most one of them is ever finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Point,
    /// Node this one was expanded from; `None` for the start node.
    pub parent: Option<NodeId>,
    /// Cost from the start (one per edge).
    pub g: i32,
    /// Manhattan distance to the goal.
    pub h: i32,
    /// Priority key, `g + h`.
    pub f: i32,
}

impl SearchNode {
    /// Create a node, deriving `f` from `g` and `h`.
    pub fn new(position: Point, parent: Option<NodeId>, g: i32, h: i32) -> Self {
        Self {
            position,
            parent,
            g,
            h,
            f: g.saturating_add(h),
        }
    }
}

/// Append-only storage for the nodes of one search session.
///
/// Parents are stored as [`NodeId`] handles into the same arena. A parent is
/// always allocated before its children, so following parents strictly
/// decreases the index and the walk always reaches the root.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its handle.
    ///
    /// `node.parent` must already be in this arena.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(
            node.parent.is_none_or(|parent| parent < id),
            "parent {:?} allocated after child",
            node.parent
        );
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::with_capacity(self.get(id).g.max(0) as usize + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let n = self.get(ci);
            path.push(n.position);
            cur = n.parent;
        }
        path.reverse();
        path
    }
}

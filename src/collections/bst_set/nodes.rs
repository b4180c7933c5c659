use std::ops::{Index, IndexMut};

use super::Key;

/// Index of a node in [`Nodes`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(super) struct NodeId(u32);

impl NodeId {
    #[inline]
    fn ix(self) -> usize {
        self.0 as usize
    }
}

/// Tree vertex. Child links are the owning edges, `parent` is a plain back index.
#[derive(Clone, Debug)]
pub(super) struct Node {
    pub key: Key,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
    /// Bumped each time the slot is freed or its key replaced. Wraps after `u32::MAX` changes.
    generation: u32,
}

/// Leftmost and rightmost nodes of a tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) struct Extremes {
    pub first: NodeId,
    pub last: NodeId,
}

/// Node arena. Slots are recycled through a free list, dropping the arena frees every node
/// without recursion.
#[derive(Debug, Default)]
pub(super) struct Nodes {
    slots: Vec<Node>,
    free: Vec<NodeId>,
}

impl Index<NodeId> for Nodes {
    type Output = Node;
    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.ix()]
    }
}

impl IndexMut<NodeId> for Nodes {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.ix()]
    }
}

impl Nodes {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
            free: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of slots in use.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Allocate a leaf holding `key` below `parent`. The caller links it into the parent.
    pub fn alloc(&mut self, key: Key, parent: Option<NodeId>) -> NodeId {
        if let Some(id) = self.free.pop() {
            let n = &mut self.slots[id.ix()];
            n.key = key;
            n.left = None;
            n.right = None;
            n.parent = parent;
            id
        } else {
            // At most `u32::MAX` slots.
            debug_assert!(self.slots.len() < u32::MAX as usize, "node arena full");
            let id = NodeId(self.slots.len() as u32);
            self.slots.push(Node {
                key,
                left: None,
                right: None,
                parent,
                generation: 0,
            });
            id
        }
    }

    /// Release a slot. The node must already be unlinked from the tree.
    pub fn free(&mut self, id: NodeId) {
        let n = &mut self.slots[id.ix()];
        n.generation = n.generation.wrapping_add(1);
        n.left = None;
        n.right = None;
        n.parent = None;
        self.free.push(id);
    }

    /// Invalidates positions taken on `id` without releasing the slot.
    pub fn retire(&mut self, id: NodeId) {
        let n = &mut self.slots[id.ix()];
        n.generation = n.generation.wrapping_add(1);
    }

    pub fn generation(&self, id: NodeId) -> u32 {
        self.slots[id.ix()].generation
    }

    /// Returns `id` if it still names the node that had `generation` when the handle was taken.
    pub fn resolve(&self, id: NodeId, generation: u32) -> Option<NodeId> {
        match self.slots.get(id.ix()) {
            Some(n) if n.generation == generation => Some(id),
            _ => None,
        }
    }

    pub fn minimum(&self, mut x: NodeId) -> NodeId {
        while let Some(l) = self[x].left {
            x = l;
        }
        x
    }

    pub fn maximum(&self, mut x: NodeId) -> NodeId {
        while let Some(r) = self[x].right {
            x = r;
        }
        x
    }

    /// In-order successor, `None` if `x` holds the largest key.
    pub fn successor(&self, x: NodeId) -> Option<NodeId> {
        if let Some(r) = self[x].right {
            return Some(self.minimum(r));
        }
        let mut n = x;
        while let Some(p) = self[n].parent {
            if self[p].right != Some(n) {
                return Some(p);
            }
            n = p;
        }
        None
    }

    /// In-order predecessor, `None` if `x` holds the smallest key.
    pub fn predecessor(&self, x: NodeId) -> Option<NodeId> {
        if let Some(l) = self[x].left {
            return Some(self.maximum(l));
        }
        let mut n = x;
        while let Some(p) = self[n].parent {
            if self[p].left != Some(n) {
                return Some(p);
            }
            n = p;
        }
        None
    }

    /// Deep copy of the subtree at `root` into a fresh, compact arena.
    ///
    /// The copy's leftmost and rightmost nodes are tracked during the walk: a node reached
    /// only through left edges with no left child of its own is the minimum, symmetrically
    /// for the maximum.
    pub fn clone_tree(&self, root: NodeId) -> (Nodes, NodeId, Extremes) {
        let mut out = Nodes::with_capacity(self.live());
        let top = out.alloc(self[root].key, None);
        let mut ext = Extremes {
            first: top,
            last: top,
        };
        // (source, copy, on left spine, on right spine)
        let mut stack = vec![(root, top, true, true)];
        while let Some((src, dst, lspine, rspine)) = stack.pop() {
            let n = &self[src];
            if let Some(l) = n.left {
                let c = out.alloc(self[l].key, Some(dst));
                out[dst].left = Some(c);
                stack.push((l, c, lspine, false));
            } else if lspine {
                ext.first = dst;
            }
            if let Some(r) = n.right {
                let c = out.alloc(self[r].key, Some(dst));
                out[dst].right = Some(c);
                stack.push((r, c, false, rspine));
            } else if rspine {
                ext.last = dst;
            }
        }
        (out, top, ext)
    }
}

#[cfg(test)]
impl Nodes {
    /// Walks the tree at `root` checking ordering and parent links, returns the node count.
    pub fn check(&self, root: Option<NodeId>) -> usize {
        let mut count = 0;
        // (node, exclusive lower bound, exclusive upper bound)
        let mut stack = Vec::new();
        if let Some(r) = root {
            assert!(self[r].parent.is_none(), "root has a parent");
            stack.push((r, None::<Key>, None::<Key>));
        }
        while let Some((x, lo, hi)) = stack.pop() {
            count += 1;
            let n = &self[x];
            if let Some(lo) = lo {
                assert!(n.key > lo, "key {} not above {}", n.key, lo);
            }
            if let Some(hi) = hi {
                assert!(n.key < hi, "key {} not below {}", n.key, hi);
            }
            if let Some(l) = n.left {
                assert_eq!(self[l].parent, Some(x), "bad parent link");
                stack.push((l, lo, Some(n.key)));
            }
            if let Some(r) = n.right {
                assert_eq!(self[r].parent, Some(x), "bad parent link");
                stack.push((r, Some(n.key), hi));
            }
        }
        assert_eq!(count, self.live());
        count
    }
}

//! [`BstSet`] an ordered set of integers on an unbalanced binary search tree.
//!
//! # Implementation
//!
//! Nodes live in an arena ( see the `nodes` module ) and refer to each other by index. Child links
//! are the owning edges, the parent link is a plain index used to walk upwards when a [`Cursor`]
//! steps to the in-order successor or predecessor. No balancing is done, so ascending or descending
//! insertion order produces a tree shaped like a list, with linear time operations.
//!
//! The set caches the nodes holding the smallest and largest keys, so [`BstSet::begin`],
//! [`BstSet::first`] and [`BstSet::last`] are constant time.
//!
//! # Positions
//!
//! A [`Cursor`] borrows the set, so it cannot be held while the set is modified. To erase an element,
//! take its detached [`Position`] with [`Cursor::position`] and pass that to [`BstSet::erase`].
//! A position that refers to an element which has since been removed is detected and reported as
//! [`CursorErrorKind::Stale`]. Positions are not tied to a particular set, using a position taken from
//! one set with another set is a logic error with unspecified ( but memory safe ) results.
//!
//! # Example
//!
//! ```
//!     use bstset::collections::BstSet;
//!     let mut set = BstSet::from([5, 3, 8, 1, 4]);
//!     set.erase(set.find(3).position()).unwrap();
//!     assert!(set.iter().eq([1, 4, 5, 8].iter()));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ptr;

use super::{CursorError, CursorErrorKind};

mod nodes;
use nodes::{NodeId, Nodes};

/// Element type of [`BstSet`].
pub type Key = i32;

/// An ordered set of `i32` based on an unbalanced binary search tree.
///
/// # Guide to methods
///
/// Set Creation: [`new`], [`clone`], [`clone_from`]
///
/// Properties: [`len`], [`is_empty`], [`contains`]
///
/// Insertion: [`insert`]
///
/// Retrieve: [`find`], [`first`], [`last`]
///
/// Removal: [`erase`], [`remove`], [`pop_first`], [`pop_last`], [`retain`], [`clear`]
///
/// Cursors: [`begin`], [`end`], [`cursor`]
///
/// Iterators: [`iter`], [`into_iter`]
///
/// [`new`]: BstSet::new
/// [`clone`]: BstSet::clone
/// [`clone_from`]: BstSet::clone_from
/// [`len`]: BstSet::len
/// [`is_empty`]: BstSet::is_empty
/// [`contains`]: BstSet::contains
/// [`insert`]: BstSet::insert
/// [`find`]: BstSet::find
/// [`first`]: BstSet::first
/// [`last`]: BstSet::last
/// [`erase`]: BstSet::erase
/// [`remove`]: BstSet::remove
/// [`pop_first`]: BstSet::pop_first
/// [`pop_last`]: BstSet::pop_last
/// [`retain`]: BstSet::retain
/// [`clear`]: BstSet::clear
/// [`begin`]: BstSet::begin
/// [`end`]: BstSet::end
/// [`cursor`]: BstSet::cursor
/// [`iter`]: BstSet::iter
/// [`into_iter`]: BstSet::into_iter
///
/// # Examples
///
/// ```
/// use bstset::collections::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(10);
/// set.insert(3);
/// set.insert(7);
///
/// // Walk forwards with a cursor.
/// let mut c = set.begin();
/// assert_eq!(c.key(), Ok(&3));
/// c.move_next().unwrap();
/// assert_eq!(c.key(), Ok(&7));
///
/// // Copies are independent.
/// let mut copy = set.clone();
/// copy.remove(7);
/// assert!(set.contains(7));
/// assert!(!copy.contains(7));
/// ```
pub struct BstSet {
    nodes: Nodes,
    root: Option<NodeId>,
    /// Node holding the smallest key.
    first: Option<NodeId>,
    /// Node holding the largest key.
    last: Option<NodeId>,
    /// Changed whenever the whole tree is replaced, so that older positions are seen as stale.
    epoch: u32,
}

impl Default for BstSet {
    /// Creates an empty `BstSet`.
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BstSet {
    fn clone(&self) -> Self {
        match self.root {
            None => Self::new(),
            Some(root) => {
                let (nodes, root, ext) = self.nodes.clone_tree(root);
                Self {
                    nodes,
                    root: Some(root),
                    first: Some(ext.first),
                    last: Some(ext.last),
                    epoch: 0,
                }
            }
        }
    }

    /// Replaces the contents of `self` with a copy of `source`.
    /// Positions previously taken from `self` become stale.
    fn clone_from(&mut self, source: &Self) {
        let epoch = self.epoch.wrapping_add(1);
        *self = source.clone();
        self.epoch = epoch;
    }
}

impl BstSet {
    /// Returns a new, empty set.
    ///
    /// # Example
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.begin() == set.end());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Nodes::new(),
            root: None,
            first: None,
            last: None,
            epoch: 0,
        }
    }

    /// Returns number of elements in the set
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut v = BstSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.live()
    }

    /// Does the set have any elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all elements. Positions taken before the call become stale.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut v = BstSet::from([1, 2]);
    /// let p = v.find(1).position();
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert!(v.cursor(p).is_err());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.first = None;
        self.last = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Adds a key to the set.
    ///
    /// Returns `false` if the key was already present, in which case the set is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Key) -> bool {
        let Some(mut n) = self.root else {
            let x = self.nodes.alloc(key, None);
            self.root = Some(x);
            self.first = Some(x);
            self.last = Some(x);
            return true;
        };
        let x = loop {
            let (nk, left, right) = {
                let node = &self.nodes[n];
                (node.key, node.left, node.right)
            };
            let (next, is_left) = match key.cmp(&nk) {
                Ordering::Equal => return false,
                Ordering::Less => (left, true),
                Ordering::Greater => (right, false),
            };
            match next {
                Some(c) => n = c,
                None => {
                    let x = self.nodes.alloc(key, Some(n));
                    if is_left {
                        self.nodes[n].left = Some(x);
                    } else {
                        self.nodes[n].right = Some(x);
                    }
                    break x;
                }
            }
        };
        if let Some(f) = self.first {
            if key < self.nodes[f].key {
                self.first = Some(x);
            }
        }
        if let Some(l) = self.last {
            if key > self.nodes[l].key {
                self.last = Some(x);
            }
        }
        true
    }

    fn search(&self, key: Key) -> Option<NodeId> {
        let mut n = self.root;
        while let Some(x) = n {
            let node = &self.nodes[x];
            n = match key.cmp(&node.key) {
                Ordering::Equal => return Some(x),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Returns a cursor at `key`, or the end cursor if the key is not in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.find(2).key(), Ok(&2));
    /// assert!(set.find(42) == set.end());
    /// ```
    pub fn find(&self, key: Key) -> Cursor<'_> {
        Cursor {
            set: self,
            at: self.search(key),
        }
    }

    /// Returns `true` if the set contains `key`.
    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// Removes the element at `pos`.
    ///
    /// The position of the erased element becomes stale. Positions of other elements stay valid,
    /// except when the erased element has two children: its in-order successor's key is then moved
    /// into the erased element's node, and the position of the successor becomes stale too.
    ///
    /// # Errors
    ///
    /// [`CursorErrorKind::EraseEnd`] if `pos` is the end position, [`CursorErrorKind::Stale`] if it
    /// refers to an element that is no longer in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::{BstSet, CursorErrorKind};
    ///
    /// let mut set = BstSet::from([1, 3, 4, 5, 8]);
    /// let p = set.find(3).position();
    /// set.erase(p).unwrap();
    /// assert!(set.iter().eq([1, 4, 5, 8].iter()));
    /// assert_eq!(set.erase(p).unwrap_err().kind(), CursorErrorKind::Stale);
    /// assert_eq!(set.erase(set.end().position()).unwrap_err().kind(), CursorErrorKind::EraseEnd);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<(), CursorError> {
        match self.locate(pos)? {
            Some(x) => {
                self.unlink(x);
                Ok(())
            }
            None => Err(CursorError::new(CursorErrorKind::EraseEnd)),
        }
    }

    /// Removes `key` from the set, returns `true` if it was present.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::from([2]);
    /// assert_eq!(set.remove(2), true);
    /// assert_eq!(set.remove(2), false);
    /// ```
    pub fn remove(&mut self, key: Key) -> bool {
        match self.search(key) {
            Some(x) => {
                self.unlink(x);
                true
            }
            None => false,
        }
    }

    /// Takes node `x` out of the tree and returns the key it held.
    fn unlink(&mut self, mut x: NodeId) -> Key {
        let key = self.nodes[x].key;

        // Cached extremes move while the tree is still intact.
        if self.last == Some(x) {
            self.last = self.nodes.predecessor(x);
        }
        if self.first == Some(x) {
            self.first = self.nodes.successor(x);
        }

        let node = &self.nodes[x];
        if let (Some(_), Some(r)) = (node.left, node.right) {
            let y = self.nodes.minimum(r);
            self.nodes[x].key = self.nodes[y].key;
            // x now holds a different key.
            self.nodes.retire(x);
            if self.last == Some(y) {
                self.last = Some(x);
            }
            x = y;
        }

        // x now has at most one child.
        let node = &self.nodes[x];
        let (child, parent) = (node.left.or(node.right), node.parent);
        if let Some(c) = child {
            self.nodes[c].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(p) => {
                if self.nodes[p].left == Some(x) {
                    self.nodes[p].left = child;
                } else {
                    self.nodes[p].right = child;
                }
            }
        }
        self.nodes.free(x);
        key
    }

    /// Retains only the elements specified by the predicate, visited in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3, 4, 5, 6]);
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Key) -> bool,
    {
        let mut cur = self.first;
        while let Some(x) = cur {
            let node = &self.nodes[x];
            if f(&node.key) {
                cur = self.nodes.successor(x);
            } else {
                // With two children the successor's key is moved into x.
                cur = if node.left.is_some() && node.right.is_some() {
                    Some(x)
                } else {
                    self.nodes.successor(x)
                };
                self.unlink(x);
            }
        }
    }

    /// Returns a reference to the smallest element, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&Key> {
        self.first.map(|x| &self.nodes[x].key)
    }

    /// Returns a reference to the largest element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Key> {
        self.last.map(|x| &self.nodes[x].key)
    }

    /// Removes the smallest element and returns it, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<Key> {
        let x = self.first?;
        Some(self.unlink(x))
    }

    /// Removes the largest element and returns it, if any.
    pub fn pop_last(&mut self) -> Option<Key> {
        let x = self.last?;
        Some(self.unlink(x))
    }

    /// Returns a cursor at the smallest element, or the end cursor if the set is empty.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor {
            set: self,
            at: self.first,
        }
    }

    /// Returns the end cursor, one past the largest element.
    pub fn end(&self) -> Cursor<'_> {
        Cursor {
            set: self,
            at: None,
        }
    }

    /// Returns a cursor at a position previously taken with [`Cursor::position`].
    ///
    /// # Errors
    ///
    /// [`CursorErrorKind::Stale`] if the element at `pos` has been removed.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3]);
    /// let p = set.find(2).position();
    /// set.insert(4);
    /// let mut c = set.cursor(p).unwrap();
    /// c.move_next().unwrap();
    /// assert_eq!(c.key(), Ok(&3));
    /// ```
    pub fn cursor(&self, pos: Position) -> Result<Cursor<'_>, CursorError> {
        Ok(Cursor {
            set: self,
            at: self.locate(pos)?,
        })
    }

    /// Maps a position to its node, `None` being the end.
    fn locate(&self, pos: Position) -> Result<Option<NodeId>, CursorError> {
        match pos.0 {
            Place::End => Ok(None),
            Place::At { id, generation, epoch } if epoch == self.epoch => self
                .nodes
                .resolve(id, generation)
                .map(Some)
                .ok_or(CursorError::new(CursorErrorKind::Stale)),
            Place::At { .. } => Err(CursorError::new(CursorErrorKind::Stale)),
        }
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next_back(), Some(&3));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.first,
            back: self.last,
            len: self.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        let n = self.nodes.check(self.root);
        assert_eq!(n, self.len());
        assert_eq!(self.first, self.root.map(|r| self.nodes.minimum(r)));
        assert_eq!(self.last, self.root.map(|r| self.nodes.maximum(r)));
    }
}

impl PartialEq for BstSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for BstSet {}

impl Hash for BstSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for k in self {
            k.hash(state);
        }
    }
}

impl Debug for BstSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Key> for BstSet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> BstSet {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<const N: usize> From<[Key; N]> for BstSet {
    /// Keys are inserted in array order, which determines the shape of the tree.
    fn from(arr: [Key; N]) -> Self {
        BstSet::from_iter(arr)
    }
}

impl Extend<Key> for BstSet {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<'a> Extend<&'a Key> for BstSet {
    fn extend<I: IntoIterator<Item = &'a Key>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a> IntoIterator for &'a BstSet {
    type Item = &'a Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for BstSet {
    type Item = Key;
    type IntoIter = IntoIter;

    /// Gets an iterator for moving out the set's contents in ascending order.
    fn into_iter(self) -> IntoIter {
        IntoIter { set: self }
    }
}

// Cursors.

/// Detached position of an element ( or the end ), see [`Cursor::position`].
///
/// Does not borrow the set, so it can be passed to [`BstSet::erase`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position(Place);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Place {
    At {
        id: NodeId,
        generation: u32,
        epoch: u32,
    },
    End,
}

impl Position {
    /// The end position.
    pub const END: Position = Position(Place::End);

    /// Is this the end position.
    pub fn is_end(&self) -> bool {
        matches!(self.0, Place::End)
    }
}

/// Bidirectional cursor over a [`BstSet`], at an element or at the end.
///
/// Returned by [`BstSet::begin`], [`BstSet::end`], [`BstSet::find`] and [`BstSet::cursor`].
/// Two cursors are equal if they are at the same element of the same set, or both at the end.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    set: &'a BstSet,
    /// `None` is the end.
    at: Option<NodeId>,
}

impl<'a> Cursor<'a> {
    /// Returns the key at the cursor.
    ///
    /// # Errors
    ///
    /// [`CursorErrorKind::DerefEnd`] at the end.
    pub fn key(&self) -> Result<&'a Key, CursorError> {
        let set: &'a BstSet = self.set;
        match self.at {
            Some(x) => Ok(&set.nodes[x].key),
            None => Err(CursorError::new(CursorErrorKind::DerefEnd)),
        }
    }

    /// Moves to the next larger element, or to the end from the largest element.
    ///
    /// # Errors
    ///
    /// [`CursorErrorKind::NextAtEnd`] at the end, the cursor does not move.
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        let x = self
            .at
            .ok_or(CursorError::new(CursorErrorKind::NextAtEnd))?;
        self.at = self.set.nodes.successor(x);
        Ok(())
    }

    /// Moves to the next smaller element, or to the largest element from the end.
    ///
    /// # Errors
    ///
    /// [`CursorErrorKind::PrevAtBegin`] at the smallest element ( or at the end of an empty set ),
    /// the cursor does not move.
    ///
    /// # Example
    ///
    /// ```
    /// use bstset::collections::{BstSet, CursorErrorKind};
    ///
    /// let set = BstSet::from([1, 2]);
    /// let mut c = set.end();
    /// c.move_prev().unwrap();
    /// assert_eq!(c.key(), Ok(&2));
    /// c.move_prev().unwrap();
    /// assert_eq!(c.move_prev().unwrap_err().kind(), CursorErrorKind::PrevAtBegin);
    /// assert_eq!(c.key(), Ok(&1));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        let prev = match self.at {
            Some(x) => self.set.nodes.predecessor(x),
            None => self.set.last,
        };
        match prev {
            Some(p) => {
                self.at = Some(p);
                Ok(())
            }
            None => Err(CursorError::new(CursorErrorKind::PrevAtBegin)),
        }
    }

    /// Returns the key after the cursor without moving it.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a Key> {
        let set: &'a BstSet = self.set;
        let x = set.nodes.successor(self.at?)?;
        Some(&set.nodes[x].key)
    }

    /// Returns the key before the cursor without moving it.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&'a Key> {
        let set: &'a BstSet = self.set;
        let x = match self.at {
            Some(x) => set.nodes.predecessor(x)?,
            None => set.last?,
        };
        Some(&set.nodes[x].key)
    }

    /// Is the cursor at the end.
    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    /// Returns a detached position for the cursor's location.
    pub fn position(&self) -> Position {
        match self.at {
            Some(id) => Position(Place::At {
                id,
                generation: self.set.nodes.generation(id),
                epoch: self.set.epoch,
            }),
            None => Position::END,
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.at, other.at) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.set, other.set),
            _ => false,
        }
    }
}

impl Eq for Cursor<'_> {}

impl Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.at {
            Some(x) => f.debug_tuple("Cursor").field(&self.set.nodes[x].key).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

// Iterators.

/// Iterator returned by [`BstSet::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: &'a Nodes,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<&'a Key> {
        if self.len == 0 {
            return None;
        }
        let nodes: &'a Nodes = self.nodes;
        let x = self.front?;
        self.len -= 1;
        self.front = nodes.successor(x);
        Some(&nodes[x].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn min(mut self) -> Option<&'a Key> {
        self.next()
    }

    fn max(mut self) -> Option<&'a Key> {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Key> {
        if self.len == 0 {
            return None;
        }
        let nodes: &'a Nodes = self.nodes;
        let x = self.back?;
        self.len -= 1;
        self.back = nodes.predecessor(x);
        Some(&nodes[x].key)
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.len
    }
}

impl FusedIterator for Iter<'_> {}

/// Consuming iterator returned by [`BstSet::into_iter`].
#[derive(Debug)]
pub struct IntoIter {
    set: BstSet,
}

impl Iterator for IntoIter {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        self.set.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.set.len();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Key> {
        self.set.pop_last()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.set.len()
    }
}

impl FusedIterator for IntoIter {}

// Tests.

#[cfg(all(test, not(miri), feature = "cap"))]
#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> = cap::Cap::new(std::alloc::System, usize::MAX);

#[cfg(test)]
fn print_memory() {
    #[cfg(all(test, not(miri), feature = "cap"))]
    println!("Memory allocated: {} bytes", ALLOCATOR.allocated());
}

/* mimalloc cannot be used with miri */
#[cfg(all(test, not(miri), not(feature = "cap")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(test)]
mod mytests;

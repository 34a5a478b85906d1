use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::iter::Iter;
use crate::node::{Color, Link, Node};

/// Persistent ordered set backed by a red-black tree.
///
/// `insert` never touches an existing node: it rebuilds the path from the
/// root to the insertion point and shares every other subtree with `self`.
/// Cloning a handle is O(1).
pub struct RbSet<K> {
    root: Link<K>,
    len: usize,
}

impl<K> RbSet<K> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Link<K>, len: usize) -> Self {
        Self { root, len }
    }

    pub(crate) fn root(&self) -> &Link<K> {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn height<K>(link: &Link<K>) -> usize {
            link.as_deref()
                .map(|n| 1 + height(&n.left).max(height(&n.right)))
                .unwrap_or(0)
        }
        height(&self.root)
    }

    /// Black nodes on the leftmost path; equal on every path at rest.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if !node.color.is_red() {
                count += 1;
            }
            current = node.left.as_deref();
        }
        count
    }

    pub fn first(&self) -> Option<&K> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&*current.key)
    }

    pub fn last(&self) -> Option<&K> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&*current.key)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }
}

impl<K: Ord> RbSet<K> {
    /// Returns a set that also holds `key`. Inserting a key that is already
    /// present returns a handle to the very same root.
    pub fn insert(&self, key: K) -> Self {
        match Self::insert_at(&self.root, key) {
            None => self.clone(),
            Some(root) => {
                let root = if root.color.is_red() {
                    root.with_color(Color::Black)
                } else {
                    root
                };
                Self {
                    root: Some(Arc::new(root)),
                    len: self.len + 1,
                }
            }
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let node_key: &K = &node.key;
            current = match key.cmp(node_key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Rebuilt subtree with `key` added, or `None` when `key` is already
    /// present and nothing had to change.
    fn insert_at(link: &Link<K>, key: K) -> Option<Node<K>> {
        let Some(node) = link.as_deref() else {
            return Some(Node::leaf(key));
        };
        let rebuilt = match key.cmp(&*node.key) {
            Ordering::Less => {
                let left = Self::insert_at(&node.left, key)?;
                node.with_left(Some(Arc::new(left)))
            }
            Ordering::Greater => {
                let right = Self::insert_at(&node.right, key)?;
                node.with_right(Some(Arc::new(right)))
            }
            Ordering::Equal => return None,
        };
        Some(Self::fix_up(rebuilt))
    }

    /// Resolves a red-red edge one level below `node`. A red `node` is left
    /// alone: the violation, if any, belongs to its parent.
    fn fix_up(node: Node<K>) -> Node<K> {
        if node.color.is_red() {
            return node;
        }

        if let Some(left) = node.left.as_deref().filter(|l| l.is_double_red()) {
            if Node::is_red(&node.right) {
                return Self::split_four_node(&node);
            }
            let node = if Node::is_red(&left.right) {
                node.with_left(Some(Arc::new(left.rotate_left())))
            } else {
                node
            };
            return node
                .with_color(Color::Red)
                .rotate_right()
                .with_color(Color::Black);
        }

        if let Some(right) = node.right.as_deref().filter(|r| r.is_double_red()) {
            if Node::is_red(&node.left) {
                return Self::split_four_node(&node);
            }
            let node = if Node::is_red(&right.left) {
                node.with_right(Some(Arc::new(right.rotate_right())))
            } else {
                node
            };
            return node
                .with_color(Color::Red)
                .rotate_left()
                .with_color(Color::Black);
        }

        node
    }

    /// Red uncle: push the blackness of `node` down to both children and
    /// hand the red up to the caller.
    fn split_four_node(node: &Node<K>) -> Node<K> {
        let blacken = |link: &Link<K>| {
            link.as_deref()
                .map(|child| Arc::new(child.with_color(Color::Black)))
        };
        node.with_children(blacken(&node.left), blacken(&node.right))
            .with_color(Color::Red)
    }
}

impl<K: Ord + Clone> RbSet<K> {
    pub fn to_sorted_vec(&self) -> Vec<K> {
        fn collect<K: Clone>(link: &Link<K>, out: &mut Vec<K>) {
            if let Some(node) = link.as_deref() {
                collect(&node.left, out);
                out.push(K::clone(&*node.key));
                collect(&node.right, out);
            }
        }

        let mut keys = Vec::with_capacity(self.len);
        collect(&self.root, &mut keys);
        debug_assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "in-order traversal is not strictly ascending"
        );
        keys
    }
}

impl<K> Clone for RbSet<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K> Default for RbSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for RbSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> PartialEq for RbSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for RbSet<K> {}

impl<K: Ord> FromIterator<K> for RbSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, key| set.insert(key))
    }
}

impl<'a, K: Ord> IntoIterator for &'a RbSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

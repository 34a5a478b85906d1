use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// In-order iterator over the keys of an [`RbSet`](crate::RbSet).
///
/// Holds at most one node per tree level, so auxiliary space is bounded by
/// the tree height.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    previous: Option<&'a K>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(max_height(len)),
            previous: None,
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

/// Upper bound on the height of a red-black tree with `len` nodes, taken
/// from the bit length of `len + 1` (at least `2 * log2(len + 1)`).
fn max_height(len: usize) -> usize {
    let bits = (usize::BITS - (len.saturating_add(1)).leading_zeros()) as usize;
    2 * bits
}

impl<'a, K: Ord> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        let key = &*node.key;
        debug_assert!(
            self.previous.is_none_or(|previous| previous < key),
            "in-order traversal is not strictly ascending"
        );
        self.previous = Some(key);
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord> ExactSizeIterator for Iter<'_, K> {}

impl<K: Ord> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            previous: self.previous,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::max_height;
    use crate::RbSet;
    use crate::node::{Color, Link, Node};
    use std::sync::Arc;

    fn node(key: u32, color: Color, left: Link<u32>, right: Link<u32>) -> Link<u32> {
        Some(Arc::new(
            Node::leaf(key).with_color(color).with_children(left, right),
        ))
    }

    fn misordered() -> RbSet<u32> {
        let root = node(
            2,
            Color::Black,
            node(3, Color::Red, None, None),
            node(1, Color::Red, None, None),
        );
        RbSet::from_root(root, 3)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "in-order traversal is not strictly ascending")]
    fn iter_rejects_misordered_tree() {
        misordered().iter().for_each(drop);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "in-order traversal is not strictly ascending")]
    fn to_sorted_vec_rejects_misordered_tree() {
        misordered().to_sorted_vec();
    }

    #[test]
    fn iter_is_sorted_and_exact() {
        let set: RbSet<&str> = ["pear", "apple", "fig", "apple", "kiwi"]
            .into_iter()
            .collect();
        let mut iter = set.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&"apple"));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&"fig", &"kiwi", &"pear"]);
    }

    #[test]
    fn iter_restarts_from_the_same_handle() {
        let set: RbSet<u32> = (0..100).rev().collect();
        let first: Vec<u32> = set.iter().copied().collect();
        let second: Vec<u32> = (&set).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn iter_is_fused() {
        let set: RbSet<u32> = [1].into_iter().collect();
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn stack_never_outgrows_height() {
        let set: RbSet<u32> = (0..5000).collect();
        let mut iter = set.iter();
        let height = set.height();
        while iter.next().is_some() {
            assert!(iter.stack.len() <= height);
        }
        assert!(height <= max_height(set.len()));
    }

    #[test]
    fn max_height_bounds() {
        assert_eq!(max_height(0), 2);
        assert_eq!(max_height(1), 4);
        assert_eq!(max_height(6), 6);
    }
}

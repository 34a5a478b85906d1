use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) fn is_red(self) -> bool {
        self == Color::Red
    }
}

pub(crate) type Link<K> = Option<Arc<Node<K>>>;

/// Immutable tree node. Children are shared between every tree version that
/// did not rebuild them.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) color: Color,
    pub(crate) key: Arc<K>,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Clone for Node<K> {
    fn clone(&self) -> Self {
        Self {
            color: self.color,
            key: Arc::clone(&self.key),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Self {
        Self {
            color: Color::Red,
            key: Arc::new(key),
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_red(link: &Link<K>) -> bool {
        link.as_ref().is_some_and(|n| n.color.is_red())
    }

    pub(crate) fn with_children(&self, left: Link<K>, right: Link<K>) -> Self {
        Self {
            color: self.color,
            key: Arc::clone(&self.key),
            left,
            right,
        }
    }

    pub(crate) fn with_left(&self, left: Link<K>) -> Self {
        self.with_children(left, self.right.clone())
    }

    pub(crate) fn with_right(&self, right: Link<K>) -> Self {
        self.with_children(self.left.clone(), right)
    }

    pub(crate) fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// A red node with at least one red child.
    pub(crate) fn is_double_red(&self) -> bool {
        self.color.is_red() && (Self::is_red(&self.left) || Self::is_red(&self.right))
    }

    /// Lifts the right child into this position. Both moved nodes keep their
    /// colors; the pivot's left subtree is reused as the new inner grandchild.
    pub(crate) fn rotate_left(&self) -> Self {
        let pivot = self
            .right
            .as_deref()
            .expect("rotate_left requires a right child");
        let lowered = self.with_right(pivot.left.clone());
        pivot.with_left(Some(Arc::new(lowered)))
    }

    pub(crate) fn rotate_right(&self) -> Self {
        let pivot = self
            .left
            .as_deref()
            .expect("rotate_right requires a left child");
        let lowered = self.with_left(pivot.right.clone());
        pivot.with_right(Some(Arc::new(lowered)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Link, Node};
    use std::sync::Arc;

    fn black(key: u32, left: Link<u32>, right: Link<u32>) -> Link<u32> {
        Some(Arc::new(
            Node::leaf(key)
                .with_color(Color::Black)
                .with_children(left, right),
        ))
    }

    fn keys(link: &Link<u32>, out: &mut Vec<u32>) {
        if let Some(node) = link.as_deref() {
            keys(&node.left, out);
            out.push(*node.key);
            keys(&node.right, out);
        }
    }

    #[test]
    fn leaf_is_red_without_children() {
        let leaf = Node::leaf("k");
        assert_eq!(leaf.color, Color::Red);
        assert!(leaf.left.is_none());
        assert!(leaf.right.is_none());
    }

    #[test]
    fn with_color_leaves_input_untouched() {
        let leaf = Node::leaf(7_u32);
        let recolored = leaf.with_color(Color::Black);
        assert_eq!(leaf.color, Color::Red);
        assert_eq!(recolored.color, Color::Black);
        assert!(Arc::ptr_eq(&leaf.key, &recolored.key));
    }

    #[test]
    fn rotate_left_preserves_order_and_shares_inner_grandchild() {
        let inner = black(3, None, None);
        let root = Node::leaf(2_u32).with_children(
            black(1, None, None),
            black(4, inner.clone(), black(5, None, None)),
        );

        let rotated = root.rotate_left();
        assert_eq!(*rotated.key, 4);

        let lowered = rotated.left.as_deref().unwrap();
        assert_eq!(*lowered.key, 2);
        assert!(Arc::ptr_eq(
            lowered.right.as_ref().unwrap(),
            inner.as_ref().unwrap()
        ));

        let mut before = Vec::new();
        keys(&Some(Arc::new(root.clone())), &mut before);
        let mut after = Vec::new();
        keys(&Some(Arc::new(rotated)), &mut after);
        assert_eq!(before, after);
        assert_eq!(*root.key, 2);
    }

    #[test]
    fn rotate_right_preserves_order() {
        let root = Node::leaf(4_u32).with_children(
            black(2, black(1, None, None), black(3, None, None)),
            black(5, None, None),
        );

        let rotated = root.rotate_right();
        assert_eq!(*rotated.key, 2);

        let mut out = Vec::new();
        keys(&Some(Arc::new(rotated)), &mut out);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "rotate_left requires a right child")]
    fn rotate_left_without_right_child_panics() {
        Node::leaf(1_u32).rotate_left();
    }

    #[test]
    #[should_panic(expected = "rotate_right requires a left child")]
    fn rotate_right_without_left_child_panics() {
        Node::leaf(1_u32).rotate_right();
    }
}

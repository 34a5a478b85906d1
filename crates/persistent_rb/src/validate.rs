use crate::node::{Link, Node};
use crate::tree::RbSet;

/// A broken red-black or search-tree invariant found by [`RbSet::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    #[error("root node is red")]
    RedRoot,
    #[error("red node has a red child")]
    RedRed,
    #[error("black height differs between siblings ({left} on the left, {right} on the right)")]
    BlackHeight { left: usize, right: usize },
    #[error("keys are not strictly ascending in order")]
    Order,
    #[error("handle records {recorded} keys but the tree holds {counted}")]
    Length { recorded: usize, counted: usize },
}

impl<K: Ord> RbSet<K> {
    /// Checks every invariant and returns the black height of the tree.
    pub fn validate(&self) -> Result<usize, Violation> {
        if Node::is_red(self.root()) {
            return Err(Violation::RedRoot);
        }
        let mut counted = 0;
        let black_height = check(self.root(), None, None, &mut counted)?;
        if counted != self.len() {
            return Err(Violation::Length {
                recorded: self.len(),
                counted,
            });
        }
        Ok(black_height)
    }
}

fn check<K: Ord>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    counted: &mut usize,
) -> Result<usize, Violation> {
    let Some(node) = link.as_deref() else {
        return Ok(0);
    };
    let key: &K = &node.key;
    if lower.is_some_and(|lo| lo >= key) || upper.is_some_and(|hi| hi <= key) {
        return Err(Violation::Order);
    }
    if node.color.is_red() && (Node::is_red(&node.left) || Node::is_red(&node.right)) {
        return Err(Violation::RedRed);
    }
    *counted += 1;

    let left = check(&node.left, lower, Some(key), counted)?;
    let right = check(&node.right, Some(key), upper, counted)?;
    if left != right {
        return Err(Violation::BlackHeight { left, right });
    }
    Ok(left + usize::from(!node.color.is_red()))
}

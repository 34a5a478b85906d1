//! Persistent red-black tree used as an ordered set.
//!
//! Every [`RbSet::insert`] returns a new handle; older handles stay valid and
//! share all untouched subtrees with the newer ones.

mod iter;
mod node;
mod tree;
mod validate;

pub use iter::Iter;
pub use tree::RbSet;
pub use validate::Violation;

//! Binary trees and the maximum path sum problem.
//!
//! A path is any non-empty sequence of nodes where each adjacent pair is
//! joined by a parent/child edge. It does not need to pass through the root.

use std::collections::VecDeque;

use crate::error::{Error, Result};

pub type Link = Option<Box<TreeNode>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Link,
    pub right: Link,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Link, right: Link) -> Self {
        Self { val, left, right }
    }

    /// Build a tree from its level-order listing, with `None` marking an
    /// absent node.
    ///
    /// Absent nodes contribute no child slots, so `[1, None, 2, 3]` describes
    /// `1 -> right 2 -> left 3`. Trailing slots may be omitted.
    pub fn from_level_order(values: &[Option<i32>]) -> Result<Link> {
        let root_val = match values.first() {
            Some(Some(val)) => *val,
            _ => {
                // a missing root with values after it has nothing to hang them on
                return match values.iter().skip(1).position(Option::is_some) {
                    Some(pos) => Err(Error::OrphanNode { index: pos + 1 }),
                    None => Ok(None),
                };
            }
        };

        // Build the nodes flat first, recording for each node the indices of its children.
        // Assembling boxed links bottom-up avoids juggling mutable references into the tree.
        let mut children: Vec<(Option<usize>, Option<usize>)> = Vec::new();
        let mut node_vals = vec![root_val];
        let mut queue = VecDeque::from([0_usize]);
        let mut slots = values.iter().enumerate().skip(1);

        children.push((None, None));
        while let Some(parent) = queue.pop_front() {
            for side in 0..2 {
                let Some((_, slot)) = slots.next() else {
                    break;
                };
                if let Some(val) = slot {
                    let child = node_vals.len();
                    node_vals.push(*val);
                    children.push((None, None));
                    if side == 0 {
                        children[parent].0 = Some(child);
                    } else {
                        children[parent].1 = Some(child);
                    }
                    queue.push_back(child);
                }
            }
        }
        if let Some((index, _)) = slots.find(|(_, slot)| slot.is_some()) {
            return Err(Error::OrphanNode { index });
        }

        // children always have larger indices than their parents
        let mut built: Vec<Link> = (0..node_vals.len()).map(|_| None).collect();
        for idx in (0..node_vals.len()).rev() {
            let (left, right) = children[idx];
            let left = left.and_then(|child| built[child].take());
            let right = right.and_then(|child| built[child].take());
            built[idx] = Some(Box::new(TreeNode::with_children(
                node_vals[idx],
                left,
                right,
            )));
        }
        Ok(built.swap_remove(0))
    }

    /// Number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        1 + link_count(&self.left) + link_count(&self.right)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + link_depth(&self.left).max(link_depth(&self.right))
    }
}

fn link_count(link: &Link) -> usize {
    link.as_deref().map_or(0, TreeNode::node_count)
}

fn link_depth(link: &Link) -> usize {
    link.as_deref().map_or(0, TreeNode::depth)
}

/// Maximum path sum, computed by post-order recursion.
///
/// Returns `None` for an empty tree.
pub fn max_path_sum_recursive(root: &Link) -> Option<i64> {
    let root = root.as_deref()?;
    let mut best = i64::MIN;
    max_gain(root, &mut best);
    Some(best)
}

/// The best sum of a downward path starting at `node`, updating `best` with
/// the best path that bends through `node`.
fn max_gain(node: &TreeNode, best: &mut i64) -> i64 {
    let left = node
        .left
        .as_deref()
        .map_or(0, |child| max_gain(child, best).max(0));
    let right = node
        .right
        .as_deref()
        .map_or(0, |child| max_gain(child, best).max(0));
    let val = i64::from(node.val);
    *best = (*best).max(val + left + right);
    val + left.max(right)
}

/// Maximum path sum, computed with an explicit stack so deep trees cannot
/// overflow the call stack.
pub fn max_path_sum_iterative(root: &Link) -> Option<i64> {
    let root = root.as_deref()?;

    // each entry is visited twice: once to expand its children, once to fold their gains
    let mut stack = vec![(root, false)];
    let mut gains: Vec<i64> = Vec::new();
    let mut best = i64::MIN;
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|child| (child, false)));
            stack.extend(node.left.as_deref().map(|child| (child, false)));
            continue;
        }

        // the left subtree finished first, so the right gain is on top
        let right = match node.right {
            Some(_) => gains.pop().unwrap_or(0).max(0),
            None => 0,
        };
        let left = match node.left {
            Some(_) => gains.pop().unwrap_or(0).max(0),
            None => 0,
        };
        let val = i64::from(node.val);
        best = best.max(val + left + right);
        gains.push(val + left.max(right));
    }
    Some(best)
}

//! CFG reachability
//!
//! Worklist search over the CFG in either edge direction. Each block is
//! expanded at most once, so the search terminates on any finite CFG,
//! back edges included.

use std::collections::{HashSet, VecDeque};

use ir::function::{BlockId, Function};

use crate::region::Region;

/// Direction of a reachability search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow branch edges forward
    Successors,

    /// Follow branch edges backward
    Predecessors,
}

/// All blocks reachable from `entry` in the given direction, `entry`
/// included.
pub fn reachable_blocks(
    function: &Function,
    entry: BlockId,
    direction: Direction,
) -> HashSet<BlockId> {
    let mut visited = HashSet::new();
    let mut worklist = VecDeque::new();
    worklist.push_back(entry);

    while let Some(current) = worklist.pop_front() {
        // Expand each block once; a revisit is dropped
        if !visited.insert(current) {
            continue;
        }

        match direction {
            Direction::Successors => {
                for &next in function.successors(current) {
                    worklist.push_back(next);
                }
            }
            Direction::Predecessors => {
                for &next in function.predecessors(current) {
                    worklist.push_back(next);
                }
            }
        }
    }

    visited
}

/// Blocks reachable from the region's entry in the given direction, with the
/// region's own blocks removed. The result is strictly disjoint from the
/// region.
pub fn reachable_outside(
    function: &Function,
    region: &Region,
    direction: Direction,
) -> HashSet<BlockId> {
    let mut blocks = reachable_blocks(function, region.entry(), direction);
    remove_own_blocks(&mut blocks, region);
    blocks
}

/// Drop the region's own blocks from a reachability result
pub fn remove_own_blocks(blocks: &mut HashSet<BlockId>, region: &Region) {
    for &block in region.blocks() {
        blocks.remove(&block);
    }
}

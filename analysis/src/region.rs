//! Regions and source line bounds
//!
//! A region is a single-entry set of basic blocks designated for extraction.
//! This module builds regions from named block sets, matches them against a
//! block listing, and computes the source line bounds the scope tests rely
//! on.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use ir::function::{BlockId, Function};

use crate::block_list::BlockListing;
use crate::diagnostics::{Diagnostic, DiagnosticReporter};

/// Inclusive source line bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    /// Lowest line seen
    pub min: u32,

    /// Highest line seen
    pub max: u32,
}

impl LineBounds {
    /// The sentinel bound: no located instruction contributed yet
    pub const INVALID: LineBounds = LineBounds {
        min: u32::MAX,
        max: 0,
    };

    /// True once at least one line has been folded in
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// True if `line` falls inside the bounds. Always false for the sentinel.
    pub fn contains(&self, line: u32) -> bool {
        self.min <= line && line <= self.max
    }

    /// Widen the bounds to cover `line`
    pub fn widen(&mut self, line: u32) {
        self.min = self.min.min(line);
        self.max = self.max.max(line);
    }
}

/// Error building a region from a named block set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// A named block does not exist in the function
    UnknownBlock { label: String },

    /// No member qualifies as the entry block
    NoEntry,

    /// More than one member is entered from outside the set
    MultipleEntries { labels: Vec<String> },

    /// A member is not reachable from the entry without leaving the set
    Unreachable { label: String },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionError::UnknownBlock { label } => {
                write!(f, "block '{}' does not exist in the function", label)
            }
            RegionError::NoEntry => {
                write!(f, "no block in the set qualifies as the region entry")
            }
            RegionError::MultipleEntries { labels } => {
                write!(f, "region has multiple entries: {}", labels.join(", "))
            }
            RegionError::Unreachable { label } => {
                write!(
                    f,
                    "block '{}' is not reachable from the region entry within the set",
                    label
                )
            }
        }
    }
}

/// A single-entry set of basic blocks designated for extraction
#[derive(Debug, Clone)]
pub struct Region {
    entry: BlockId,
    /// Members in ascending ID order, so iteration is stable across runs
    order: Vec<BlockId>,
    members: HashSet<BlockId>,
}

impl Region {
    /// Build a region from an entry block and its members. The entry is added
    /// to the member set if absent.
    pub fn from_blocks(entry: BlockId, blocks: impl IntoIterator<Item = BlockId>) -> Self {
        let mut members: HashSet<BlockId> = blocks.into_iter().collect();
        members.insert(entry);

        let mut order: Vec<BlockId> = members.iter().copied().collect();
        order.sort();

        Self {
            entry,
            order,
            members,
        }
    }

    /// Build a region from block labels, validating the single-entry
    /// invariant: exactly one member is entered from outside the set, and
    /// every member is reachable from it without leaving the set.
    pub fn from_named_blocks(
        function: &Function,
        labels: &HashSet<String>,
    ) -> Result<Region, RegionError> {
        let mut members = HashSet::new();
        for label in labels {
            match function.block_by_label(label) {
                Some(id) => {
                    members.insert(id);
                }
                None => {
                    return Err(RegionError::UnknownBlock {
                        label: label.clone(),
                    })
                }
            }
        }

        // A member is an entry candidate if the function enters the region
        // through it: either it is the function entry block or it has a
        // predecessor outside the set.
        let mut entries: Vec<BlockId> = members
            .iter()
            .copied()
            .filter(|&block| {
                block == function.entry
                    || function
                        .predecessors(block)
                        .iter()
                        .any(|pred| !members.contains(pred))
            })
            .collect();
        entries.sort();

        let entry = match entries.len() {
            0 => return Err(RegionError::NoEntry),
            1 => entries[0],
            _ => {
                let labels = entries
                    .iter()
                    .map(|&block| function.block(block).label.clone())
                    .collect();
                return Err(RegionError::MultipleEntries { labels });
            }
        };

        // Every member must be reachable from the entry inside the set
        let mut reached = HashSet::new();
        let mut worklist = VecDeque::new();
        worklist.push_back(entry);
        while let Some(current) = worklist.pop_front() {
            if !reached.insert(current) {
                continue;
            }
            for &next in function.successors(current) {
                if members.contains(&next) {
                    worklist.push_back(next);
                }
            }
        }

        if let Some(&missed) = members.iter().find(|block| !reached.contains(*block)) {
            return Err(RegionError::Unreachable {
                label: function.block(missed).label.clone(),
            });
        }

        Ok(Region::from_blocks(entry, members))
    }

    /// The region's entry block
    pub fn entry(&self) -> BlockId {
        self.entry
    }

    /// The region's blocks in a stable order
    pub fn blocks(&self) -> &[BlockId] {
        &self.order
    }

    /// True if the block belongs to the region
    pub fn contains(&self, block: BlockId) -> bool {
        self.members.contains(&block)
    }

    /// Number of blocks in the region
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True for a region with no blocks
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if this region is the one the listing names for its containing
    /// function: every block is named and the counts agree exactly.
    pub fn is_target_region(&self, function: &Function, listing: &BlockListing) -> bool {
        let named = match listing.get(&function.name) {
            Some(named) => named,
            None => return false,
        };

        let mut counted = 0;
        for &block in &self.order {
            if !named.contains(&function.block(block).label) {
                return false;
            }
            counted += 1;
        }

        counted == named.len()
    }
}

/// Minimum and maximum source line over the region's located instructions
pub fn region_bounds(function: &Function, region: &Region) -> LineBounds {
    let mut bounds = LineBounds::INVALID;

    for &block in region.blocks() {
        for &inst in &function.block(block).instructions {
            if let Some(line) = function.inst(inst).line {
                bounds.widen(line);
            }
        }
    }

    bounds
}

/// Minimum and maximum source line over the whole function, seeded from the
/// function's declared line. Missing function metadata is an anomaly, not a
/// failure; the caller gets the sentinel bound back.
pub fn function_bounds(function: &Function, reporter: &mut DiagnosticReporter) -> LineBounds {
    let mut bounds = LineBounds::INVALID;

    match function.declared_line {
        Some(line) => bounds.widen(line),
        None => {
            reporter.add(Diagnostic::warning(format!(
                "function '{}' has no declaration line in its debug metadata",
                function.name
            )));
        }
    }

    for block in &function.blocks {
        for &inst in &block.instructions {
            if let Some(line) = function.inst(inst).line {
                bounds.widen(line);
            }
        }
    }

    bounds
}

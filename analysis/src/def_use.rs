//! Backward def/use source walking
//!
//! Starting from a memory instruction, walks backwards over operand chains to
//! find the local allocations and global values whose memory the instruction
//! touches. Intermediate computation nodes are traversal-only and never end
//! up in the result.

use std::collections::HashSet;

use ir::function::{Function, GlobalId, InstId};
use ir::instructions::{InstKind, Operand};

/// A definition site discovered by the source walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceValue {
    /// A stack allocation inside the function
    Local(InstId),

    /// A module-level global value
    Global(GlobalId),
}

/// Walk backwards from `start` over operand chains, collecting every local
/// allocation and global value that feeds it.
///
/// The walk follows the memory an instruction touches, not where a stored
/// value came from: a store contributes only the address being written, and
/// a memcpy contributes both its destination and its source address but
/// never its length.
pub fn sources_of(function: &Function, start: InstId) -> HashSet<SourceValue> {
    let mut sources = HashSet::new();
    let mut visited: HashSet<InstId> = HashSet::new();
    let mut worklist = vec![start];

    while let Some(current) = worklist.pop() {
        if !visited.insert(current) {
            continue;
        }

        let inst = function.inst(current);

        if inst.kind == InstKind::Alloca {
            // The chain terminates at the allocation site
            sources.insert(SourceValue::Local(current));
            continue;
        }

        if let Some(indices) = inst.kind.address_operand_indices() {
            for &index in indices {
                if let Some(operand) = inst.operands.get(index) {
                    trace_operand(operand, &mut worklist, &mut sources);
                }
            }
        } else {
            for operand in &inst.operands {
                trace_operand(operand, &mut worklist, &mut sources);
            }
        }
    }

    sources
}

/// Queue an instruction operand for expansion or record a global source.
/// Arguments and constants are neither.
fn trace_operand(
    operand: &Operand,
    worklist: &mut Vec<InstId>,
    sources: &mut HashSet<SourceValue>,
) {
    match operand {
        Operand::Inst(id) => worklist.push(*id),
        Operand::Global(id) => {
            sources.insert(SourceValue::Global(*id));
        }
        Operand::Argument(_) | Operand::Constant(_) => {}
    }
}

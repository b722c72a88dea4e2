//! Variable classification
//!
//! Decides, for every definition site feeding a memory instruction of the
//! region, whether the variable must become an input of the extracted
//! function, an output, both, or neither. Declaration placement is judged by
//! debug line against the region's line bounds, not by block membership:
//! stack buffers are often allocated in the entry block long before the line
//! that declares them.

use std::collections::HashSet;

use ir::function::{BlockId, Function, InstId};
use ir::instructions::{InstKind, Operand};

use crate::def_use::{sources_of, SourceValue};
use crate::diagnostics::{Diagnostic, DiagnosticReporter};
use crate::region::LineBounds;

/// How global values found by the source walk participate in classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobalHandling {
    /// Globals are collected by the walk but never classified
    #[default]
    Ignore,

    /// Classify purely by the triggering instruction kind: a load makes the
    /// global an input, a store or memcpy makes it an output. Line scoping
    /// never applies to globals.
    ByInstructionKind,
}

/// Classification options for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyConfig {
    /// Global value handling
    pub globals: GlobalHandling,
}

/// Run-scoped classification state. One context per analyzed region; reusing
/// a context across runs would leak first-encounter decisions into the next
/// region.
pub struct ClassifyContext<'a> {
    function: &'a Function,
    bounds: LineBounds,
    predecessors: &'a HashSet<BlockId>,
    successors: &'a HashSet<BlockId>,
    config: ClassifyConfig,

    /// Source values already decided in this run. A value is classified on
    /// first encounter and never revisited.
    analyzed: HashSet<SourceValue>,

    inputs: HashSet<SourceValue>,
    outputs: HashSet<SourceValue>,
}

impl<'a> ClassifyContext<'a> {
    /// Create a fresh context for one region analysis run
    pub fn new(
        function: &'a Function,
        bounds: LineBounds,
        predecessors: &'a HashSet<BlockId>,
        successors: &'a HashSet<BlockId>,
        config: ClassifyConfig,
    ) -> Self {
        Self {
            function,
            bounds,
            predecessors,
            successors,
            config,
            analyzed: HashSet::new(),
            inputs: HashSet::new(),
            outputs: HashSet::new(),
        }
    }

    /// Classify every definition site feeding one memory instruction of the
    /// region. Sources already seen in this run are skipped.
    pub fn analyze_instruction(&mut self, inst: InstId, reporter: &mut DiagnosticReporter) {
        let trigger = self.function.inst(inst).kind.clone();

        for source in sources_of(self.function, inst) {
            if !self.analyzed.insert(source) {
                continue;
            }

            match source {
                SourceValue::Local(alloca) => self.classify_local(alloca, &trigger, reporter),
                SourceValue::Global(_) => self.classify_global(source, &trigger),
            }
        }
    }

    fn classify_local(
        &mut self,
        alloca: InstId,
        trigger: &InstKind,
        reporter: &mut DiagnosticReporter,
    ) {
        let declared_inside = self.declared_in_region(alloca, reporter);

        // Allocated in a predecessor block and not declared inside the
        // region: the extracted function must receive it. Whether it was
        // initialized there does not matter; uninitialized stack arrays
        // still belong to the caller.
        if self.predecessors.contains(&self.function.block_of(alloca)) && !declared_inside {
            self.inputs.insert(SourceValue::Local(alloca));
        }

        // The region writes the variable and some successor block reads it:
        // if the variable was declared inside the region it must be returned.
        // Variables declared outside are already visible to the caller.
        if trigger.is_store_like() && declared_inside {
            let used_after = self
                .function
                .users_of(Operand::Inst(alloca))
                .into_iter()
                .any(|user| self.successors.contains(&self.function.block_of(user)));

            if used_after {
                self.outputs.insert(SourceValue::Local(alloca));
            }
        }
    }

    fn classify_global(&mut self, global: SourceValue, trigger: &InstKind) {
        match self.config.globals {
            GlobalHandling::Ignore => {}
            GlobalHandling::ByInstructionKind => {
                if *trigger == InstKind::Load {
                    self.inputs.insert(global);
                }
                if trigger.is_store_like() {
                    self.outputs.insert(global);
                }
            }
        }
    }

    /// True if the variable's declared line falls inside the region bounds.
    /// A variable with no debug metadata fails the test and is surfaced as an
    /// anomaly; it stays eligible under the outside-region rules.
    fn declared_in_region(&self, alloca: InstId, reporter: &mut DiagnosticReporter) -> bool {
        match self.function.debug.variable(alloca) {
            Some(variable) => self.bounds.contains(variable.line),
            None => {
                reporter.add(Diagnostic::warning(format!(
                    "no debug metadata for a local allocation in '{}', treating it as declared outside the region",
                    self.function.name
                )));
                false
            }
        }
    }

    /// The input set accumulated so far
    pub fn inputs(&self) -> &HashSet<SourceValue> {
        &self.inputs
    }

    /// The output set accumulated so far
    pub fn outputs(&self) -> &HashSet<SourceValue> {
        &self.outputs
    }

    /// Every value classified as input or output, in no particular order
    pub fn classified(&self) -> Vec<SourceValue> {
        self.inputs.union(&self.outputs).copied().collect()
    }

    /// True if the value ended up in the input set
    pub fn is_input(&self, value: SourceValue) -> bool {
        self.inputs.contains(&value)
    }

    /// True if the value ended up in the output set
    pub fn is_output(&self, value: SourceValue) -> bool {
        self.outputs.contains(&value)
    }
}

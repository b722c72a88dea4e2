//! Region analysis pipeline
//!
//! Ties the stages together for one region: gate on the block listing,
//! compute line bounds and the predecessor/successor block sets, classify
//! every variable touched by the region's memory instructions, and assemble
//! the report.

use ir::function::{Function, Module};
use ir::types::TypeDescriptor;

use crate::block_list::BlockListing;
use crate::classify::{ClassifyConfig, ClassifyContext};
use crate::def_use::SourceValue;
use crate::diagnostics::{Diagnostic, DiagnosticReporter};
use crate::region::{function_bounds, region_bounds, Region};
use crate::reachability::{reachable_outside, Direction};
use crate::report::{ExtractionReport, VariableRecord};
use crate::type_resolver::base_type_of;

/// Runs the analysis pipeline over candidate regions
pub struct RegionAnalyzer {
    config: ClassifyConfig,
}

impl RegionAnalyzer {
    /// Create an analyzer with the given classification options
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Analyze one candidate region. Returns `None` when the region is not
    /// the one the listing names for its function - not an error, just not
    /// this one.
    pub fn analyze(
        &self,
        module: &Module,
        function: &Function,
        region: &Region,
        listing: &BlockListing,
        reporter: &mut DiagnosticReporter,
    ) -> Option<ExtractionReport> {
        if !region.is_target_region(function, listing) {
            return None;
        }

        let bounds = region_bounds(function, region);
        let func_bounds = function_bounds(function, reporter);

        let predecessors = reachable_outside(function, region, Direction::Predecessors);
        let successors = reachable_outside(function, region, Direction::Successors);

        let mut context =
            ClassifyContext::new(function, bounds, &predecessors, &successors, self.config);

        for &block in region.blocks() {
            for &inst in &function.block(block).instructions {
                if !function.inst(inst).kind.is_memory_access() {
                    continue;
                }
                context.analyze_instruction(inst, reporter);
            }
        }

        let mut report = ExtractionReport {
            function: function.name.clone(),
            region_lines: bounds.into(),
            function_lines: func_bounds.into(),
            variables: build_records(module, function, &context, reporter),
        };
        report.normalize();

        Some(report)
    }
}

impl Default for RegionAnalyzer {
    fn default() -> Self {
        Self::new(ClassifyConfig::default())
    }
}

/// Turn the classification sets into report records. A classified local with
/// no debug metadata cannot be named and is skipped with an anomaly notice;
/// an unresolvable declared type is reported but still emitted as "unknown".
fn build_records(
    module: &Module,
    function: &Function,
    context: &ClassifyContext,
    reporter: &mut DiagnosticReporter,
) -> Vec<VariableRecord> {
    let mut records = Vec::new();

    for value in context.classified() {
        let (name, declared_ty) = match value {
            SourceValue::Local(alloca) => match function.debug.variable(alloca) {
                Some(variable) => (variable.name.clone(), variable.ty.clone()),
                None => {
                    reporter.add(Diagnostic::warning(format!(
                        "a classified local in '{}' has no debug metadata, skipped in the report",
                        function.name
                    )));
                    continue;
                }
            },
            SourceValue::Global(id) => {
                let global = module.global(id);
                (global.name.clone(), global.ty.clone())
            }
        };

        let resolved = base_type_of(&declared_ty);
        if resolved.base == TypeDescriptor::Unknown {
            reporter.add(Diagnostic::warning(format!(
                "could not resolve the declared type of '{}'",
                name
            )));
        }

        records.push(VariableRecord {
            name,
            type_name: resolved.base.to_string(),
            indirection: resolved.indirection,
            is_input: context.is_input(value),
            is_output: context.is_output(value),
        });
    }

    records
}

/// Convenience wrapper: build the region named by the listing for every
/// function of the module and analyze it. Region construction failures are
/// reported and skipped; other functions still run.
pub fn analyze_module(
    module: &Module,
    listing: &BlockListing,
    config: ClassifyConfig,
    reporter: &mut DiagnosticReporter,
) -> Vec<ExtractionReport> {
    let analyzer = RegionAnalyzer::new(config);
    let mut reports = Vec::new();

    // Deterministic function order: module order, filtered by the listing
    for function in &module.functions {
        let labels = match listing.get(&function.name) {
            Some(labels) => labels,
            None => continue,
        };

        match Region::from_named_blocks(function, labels) {
            Ok(region) => {
                if let Some(report) =
                    analyzer.analyze(module, function, &region, listing, reporter)
                {
                    reports.push(report);
                }
            }
            Err(error) => {
                reporter.add(Diagnostic::error(format!(
                    "cannot build the region named for '{}': {}",
                    function.name, error
                )));
            }
        }
    }

    reports
}

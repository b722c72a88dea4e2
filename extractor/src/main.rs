use std::env;
use std::fs::File;
use std::path::Path;

use analysis::analyzer::analyze_module;
use analysis::block_list::read_block_list_file;
use analysis::classify::ClassifyConfig;
use analysis::diagnostics::DiagnosticReporter;
use analysis::report::{JsonSink, ReportSink};
use ir::builder::FunctionBuilder;
use ir::function::Module;
use ir::instructions::Operand;
use ir::types::TypeDescriptor;

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let listing_path = match args.get(1) {
        Some(path) => path.clone(),
        None => {
            return Err(format!(
                "usage: {} <block-list-file> [report-file]",
                args.first().map(String::as_str).unwrap_or("extractor")
            ))
        }
    };
    let report_path = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "extractinfo.json".to_string());

    println!("\n=== Region extraction analysis ===");

    // Step 1: Read the block listing
    println!("\n--- Block Listing ---");
    let mut reporter = DiagnosticReporter::new();
    let listing = read_block_list_file(Path::new(&listing_path), &mut reporter)
        .map_err(|e| format!("cannot read '{}': {}", listing_path, e))?;
    println!(
        "Read {} function entr{} from {}",
        listing.len(),
        if listing.len() == 1 { "y" } else { "ies" },
        listing_path
    );

    // Step 2: Load the module under analysis
    println!("\n--- Module ---");
    let module = demo_module();
    println!(
        "Module '{}' with {} function(s)",
        module.name,
        module.functions.len()
    );

    // Step 3: Build and analyze the named regions
    println!("\n--- Region Analysis ---");
    let reports = analyze_module(&module, &listing, ClassifyConfig::default(), &mut reporter);
    println!("Matched {} region(s)", reports.len());

    // Step 4: Emit the reports
    println!("\n--- Report ---");
    let file = File::create(&report_path)
        .map_err(|e| format!("cannot create '{}': {}", report_path, e))?;
    let mut sink = JsonSink::new(file);
    for report in &reports {
        sink.emit(report).map_err(|e| e.to_string())?;
        println!(
            "Region of '{}' (lines {}-{}): {} variable(s)",
            report.function,
            report.region_lines.start,
            report.region_lines.end,
            report.variables.len()
        );
    }
    println!("Wrote {}", report_path);

    reporter.print_all();

    Ok(())
}

/// A stand-in for a host compiler's IR, equivalent to:
///
///   1  int compute(void) {
///   2      int x = 1;
///   3      int buf[4];
///   4
///   5      int y = x + 1;      // region: head
///   6      int tmp = y;
///   7      memcpy(buf, &tmp);  // region: body
///   8
///   9      return tmp;
///  10  }
fn demo_module() -> Module {
    let mut builder = FunctionBuilder::new("compute");
    builder.declared_at(1);

    let entry = builder.add_block("entry");
    let head = builder.add_block("head");
    let body = builder.add_block("body");
    let exit = builder.add_block("exit");
    builder.add_edge(entry, head);
    builder.add_edge(head, body);
    builder.add_edge(body, exit);

    let x = builder.alloca(entry, "x", 2, TypeDescriptor::basic("int"));
    let buf = builder.alloca(entry, "buf", 3, TypeDescriptor::basic("int").array_of());
    let tmp = builder.alloca(entry, "tmp", 6, TypeDescriptor::basic("int"));
    builder.store(entry, Operand::Constant(1), Operand::Inst(x), Some(2));

    let loaded = builder.load(head, Operand::Inst(x), Some(5));
    let added = builder.other(
        head,
        "add",
        vec![Operand::Inst(loaded), Operand::Constant(1)],
        Some(5),
    );
    builder.store(head, Operand::Inst(added), Operand::Inst(tmp), Some(6));

    builder.memcpy(
        body,
        Operand::Inst(buf),
        Operand::Inst(tmp),
        Operand::Constant(16),
        Some(7),
    );

    let result = builder.load(exit, Operand::Inst(tmp), Some(9));
    builder.other(exit, "ret", vec![Operand::Inst(result)], Some(9));

    let mut module = Module::new("demo");
    module.functions.push(builder.finish());
    module
}

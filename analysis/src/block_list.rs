//! Block list reading
//!
//! Parses the text listing that names which basic blocks of which function
//! make up the region to analyze. A line starting with `!` introduces a
//! function; every following non-blank line names a member block until the
//! next header.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticReporter};

/// Marker that introduces a function header line in the listing
pub const FUNCTION_MARKER: char = '!';

/// Named block sets, keyed by containing function name
pub type BlockListing = HashMap<String, HashSet<String>>;

/// Error reading a block listing
#[derive(Debug, Clone)]
pub enum BlockListError {
    /// The listing could not be read
    Io(String),
}

impl fmt::Display for BlockListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlockListError::Io(message) => write!(f, "io error: {}", message),
        }
    }
}

/// Read a block listing from a file path
pub fn read_block_list_file(
    path: &Path,
    reporter: &mut DiagnosticReporter,
) -> Result<BlockListing, BlockListError> {
    let file = File::open(path).map_err(|e| BlockListError::Io(e.to_string()))?;
    read_block_list(BufReader::new(file), reporter)
}

/// Read a block listing from any line-oriented reader.
///
/// Blank lines are skipped. A block line with no preceding function header is
/// reported and dropped; reading continues. A repeated function header
/// extends the existing set rather than replacing it.
pub fn read_block_list<R: BufRead>(
    reader: R,
    reporter: &mut DiagnosticReporter,
) -> Result<BlockListing, BlockListError> {
    let mut listing = BlockListing::new();
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| BlockListError::Io(e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix(FUNCTION_MARKER) {
            let name = header.trim().to_string();
            listing.entry(name.clone()).or_insert_with(HashSet::new);
            current = Some(name);
            continue;
        }

        match current.as_ref().and_then(|name| listing.get_mut(name)) {
            Some(blocks) => {
                blocks.insert(trimmed.to_string());
            }
            None => {
                reporter.add(Diagnostic::error(format!(
                    "line {}: block '{}' has no parent function, line dropped",
                    index + 1,
                    trimmed
                )));
            }
        }
    }

    Ok(listing)
}

//! Extraction report
//!
//! The structured artifact of one analysis run: the region and function line
//! bounds plus one record per classified variable. Records are sorted by name
//! so identical classification sets always render identically.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::region::LineBounds;

/// A start/end line pair as written to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    /// First line
    pub start: u32,

    /// Last line
    pub end: u32,
}

impl From<LineBounds> for LineRange {
    fn from(bounds: LineBounds) -> Self {
        LineRange {
            start: bounds.min,
            end: bounds.max,
        }
    }
}

/// One classified variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    /// The variable's source-level name
    pub name: String,

    /// The resolved base type, rendered as source text
    #[serde(rename = "type")]
    pub type_name: String,

    /// Pointer/array layers between the declared type and its base
    pub indirection: u32,

    /// The extracted function must receive this variable
    pub is_input: bool,

    /// The extracted function must return this variable
    pub is_output: bool,
}

/// The report document for one analyzed region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// The containing function's name
    pub function: String,

    /// Line bounds of the region
    pub region_lines: LineRange,

    /// Line bounds of the whole function
    pub function_lines: LineRange,

    /// Classified variables, sorted by name
    pub variables: Vec<VariableRecord>,
}

impl ExtractionReport {
    /// Sort the variable records by name so emission is deterministic
    pub fn normalize(&mut self) {
        self.variables.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// Error emitting a report
#[derive(Debug)]
pub enum ReportError {
    /// The sink could not be written
    Io(String),

    /// The report could not be serialized
    Serialize(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::Io(message) => write!(f, "io error: {}", message),
            ReportError::Serialize(message) => write!(f, "serialization error: {}", message),
        }
    }
}

/// Where finished reports go. The analysis core stays independent of the
/// output format; sinks decide how a report is rendered.
pub trait ReportSink {
    /// Render and write one report
    fn emit(&mut self, report: &ExtractionReport) -> Result<(), ReportError>;
}

/// Writes reports as pretty-printed JSON
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &ExtractionReport) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.writer, report)
            .map_err(|e| ReportError::Serialize(e.to_string()))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| ReportError::Io(e.to_string()))
    }
}

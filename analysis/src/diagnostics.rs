//! Analysis diagnostic system
//!
//! This module provides a unified system for surfacing the recoverable
//! anomalies the analysis runs into: malformed listing lines, missing debug
//! metadata, unresolvable types. Nothing here is fatal; the analysis reports
//! and continues.

use std::fmt;

use colored::Colorize;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Error - a malformed input the analysis recovered from
    Error,
    /// Warning - an anomaly that may degrade the result
    Warning,
    /// Note - additional information
    Note,
}

/// A diagnostic message with optional related notes
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,

    /// Primary message
    pub message: String,

    /// Related diagnostic messages
    pub notes: Vec<Diagnostic>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Create a new note diagnostic
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Note,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Add a related note
    pub fn with_note(mut self, note: Diagnostic) -> Self {
        self.notes.push(note);
        self
    }

    fn level_name(&self) -> &'static str {
        match self.level {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Note => "note",
        }
    }

    /// Render with a colored severity prefix for terminal output
    pub fn render_colored(&self) -> String {
        let prefix = match self.level {
            DiagnosticLevel::Error => self.level_name().red().bold(),
            DiagnosticLevel::Warning => self.level_name().yellow().bold(),
            DiagnosticLevel::Note => self.level_name().blue(),
        };

        let mut output = format!("{}: {}", prefix, self.message);
        for note in &self.notes {
            output.push_str(&format!("\n{}", note.render_colored()));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level_name(), self.message)?;

        for note in &self.notes {
            write!(f, "\n{}", note)?;
        }

        Ok(())
    }
}

/// A reporter that collects diagnostics over one run
pub struct DiagnosticReporter {
    /// All diagnostics collected
    pub diagnostics: Vec<Diagnostic>,

    /// Count of errors
    pub error_count: usize,

    /// Count of warnings
    pub warning_count: usize,
}

impl DiagnosticReporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => self.error_count += 1,
            DiagnosticLevel::Warning => self.warning_count += 1,
            DiagnosticLevel::Note => {}
        }

        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors were reported
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Report all diagnostics as plain text
    pub fn report(&self) -> String {
        let mut output = String::new();

        for diagnostic in &self.diagnostics {
            output.push_str(&format!("{}\n", diagnostic));
        }

        output.push_str(&format!(
            "{} error(s), {} warning(s) emitted\n",
            self.error_count, self.warning_count
        ));

        output
    }

    /// Print all diagnostics to stderr with colored severity prefixes
    pub fn print_all(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic.render_colored());
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

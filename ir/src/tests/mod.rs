//! Tests for the IR model
//!
//! This module contains tests for the CFG structures and the function
//! builder.

mod builder_tests;

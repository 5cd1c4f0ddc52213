//! Tests for expression construction and parse errors.

mod errors;

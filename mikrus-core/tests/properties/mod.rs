//! Property-based tests for `mikrus-core`

mod diagnostics_tests;
mod tracing_tests;

//! Integration tests for `mikrus-core`

mod client_tests;
mod stats_tests;
mod stub;

//! Property-based tests for the tracing configuration

use mikrus_core::{TracingConfig, TracingLevel, TracingOutput, span_names};
use proptest::prelude::*;

// ========== Strategies ==========

/// Strategy for generating tracing levels
fn arb_tracing_level() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

/// Strategy for generating tracing output types
fn arb_tracing_output() -> impl Strategy<Value = TracingOutput> {
    prop_oneof![
        Just(TracingOutput::Stderr),
        "[a-z]{1,12}\\.log".prop_map(|name| TracingOutput::File {
            path: std::env::temp_dir().join(name),
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn tracing_config_builder_composable(
        level in arb_tracing_level(),
        output in arb_tracing_output(),
    ) {
        let config = TracingConfig::new()
            .with_level(level)
            .with_output(output.clone());

        prop_assert_eq!(config.level, level);
        prop_assert_eq!(config.output, output);
        prop_assert!(config.filter.is_none());
    }

    #[test]
    fn default_filter_mentions_level_for_each_crate(level in arb_tracing_level()) {
        let directive = TracingConfig::new().with_level(level).filter_directive();
        let expected_core = format!("mikrus_core={level}");
        let expected_cli = format!("mikctl={level}");
        prop_assert!(directive.contains(&expected_core));
        prop_assert!(directive.contains(&expected_cli));
    }

    #[test]
    fn tracing_level_roundtrip(level in arb_tracing_level()) {
        let parsed: Result<TracingLevel, _> = level.to_string().to_uppercase().parse();
        prop_assert_eq!(parsed, Ok(level));
    }

    #[test]
    fn more_verbosity_never_lowers_level(count in 0u8..10) {
        let level = TracingLevel::from_verbosity(count);
        let next = TracingLevel::from_verbosity(count.saturating_add(1));
        prop_assert!(next >= level);
    }
}

// ========== Span Names ==========

#[test]
fn span_names_follow_naming_convention() {
    for name in [
        span_names::API_CALL,
        span_names::CONFIG_LOAD,
        span_names::CONFIG_SAVE,
        span_names::DIAGNOSTICS_PARSE,
    ] {
        assert!(name.contains('.'), "{name} is not `category.operation`");
    }
}

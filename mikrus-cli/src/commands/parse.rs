//! Local parsing of saved diagnostics output.

use std::path::Path;

use mikrus_core::{
    Utility, parse_disk_space, parse_memory_usage, parse_process_list, parse_uptime, span_names,
};

use crate::cli::ReportFormat;
use crate::error::CliError;
use crate::report::Report;
use crate::util::read_input;

/// Parse command handler
pub fn cmd_parse(
    utility: Utility,
    file: Option<&Path>,
    format: ReportFormat,
) -> Result<(), CliError> {
    let text = read_input(file)?;
    let report = parse_text(utility, &text)?;
    println!("{}", report.render(format)?);
    Ok(())
}

/// Runs the parser matching `utility` over `text`
pub fn parse_text(utility: Utility, text: &str) -> Result<Report, CliError> {
    let _span = mikrus_core::trace_operation!(
        span_names::DIAGNOSTICS_PARSE,
        utility = %utility,
        bytes = text.len()
    )
    .entered();

    let report = match utility {
        Utility::Free => Report::Memory(parse_memory_usage(text)?),
        Utility::Df => Report::Disk(parse_disk_space(text)?),
        Utility::Uptime => Report::Uptime(parse_uptime(text)?),
        Utility::Ps => Report::Processes(parse_process_list(text)?),
    };
    Ok(report)
}

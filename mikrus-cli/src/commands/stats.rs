//! Server diagnostics command.

use mikrus_core::{
    RawStats, Utility, parse_disk_space, parse_memory_usage, parse_process_list, parse_uptime,
    span_names,
};

use crate::cli::{ReportFormat, Section};
use crate::error::CliError;
use crate::report::Report;
use crate::util::{Overrides, block_on, create_client};

/// Fetch and show diagnostics command handler
pub fn cmd_stats(
    overrides: &Overrides<'_>,
    section: Section,
    format: ReportFormat,
) -> Result<(), CliError> {
    let client = create_client(overrides)?;
    let raw = block_on(client.stats())??;

    let report = build_report(&raw, section)?;
    println!("{}", report.render(format)?);
    Ok(())
}

/// Parses only the part of `raw` that `section` asks for
pub fn build_report(raw: &RawStats, section: Section) -> Result<Report, CliError> {
    let _span = mikrus_core::trace_operation!(
        span_names::DIAGNOSTICS_PARSE,
        section = ?section
    )
    .entered();

    let report = match section {
        Section::All => Report::All(raw.diagnostics()?),
        Section::Memory => Report::Memory(parse_memory_usage(&raw.free)?),
        Section::Disk => Report::Disk(parse_disk_space(&raw.df)?),
        Section::Uptime => Report::Uptime(parse_uptime(&raw.uptime)?),
        Section::Processes => Report::Processes(parse_process_list(&raw.ps)?),
    };
    tracing::debug!(
        utilities = ?section_utilities(section),
        "Diagnostics parsed"
    );
    Ok(report)
}

fn section_utilities(section: Section) -> &'static [Utility] {
    match section {
        Section::All => &[Utility::Free, Utility::Df, Utility::Uptime, Utility::Ps],
        Section::Memory => &[Utility::Free],
        Section::Disk => &[Utility::Df],
        Section::Uptime => &[Utility::Uptime],
        Section::Processes => &[Utility::Ps],
    }
}

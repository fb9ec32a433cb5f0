use crate::core::export;
use crate::core::{
    Config, FileSource, FilterOptions, NodeReport, NodeSource, Scontrol, StatePattern,
};
use crate::ui::{self, formatters};
use anyhow::{Context, Result};
use clap::ArgMatches;

/// Build the filter set from the command line flags.
///
/// The state pattern is compiled here, so a bad pattern is reported before
/// the scheduler is queried.
pub fn filter_from_matches(matches: &ArgMatches) -> Result<FilterOptions> {
    let state = matches
        .get_one::<String>("state")
        .map(|pattern| {
            StatePattern::new(pattern)
                .with_context(|| format!("Invalid --state pattern '{}'", pattern))
        })
        .transpose()?;

    Ok(FilterOptions {
        cpu_only: matches.get_flag("cpu-only"),
        gpu_only: matches.get_flag("gpu-only"),
        idle_only: matches.get_flag("idle-only"),
        state,
    })
}

fn source_from_matches(matches: &ArgMatches, config: &Config) -> Box<dyn NodeSource> {
    match matches.get_one::<String>("input") {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let flag = matches.get_one::<String>("scontrol").map(String::as_str);
            Box::new(Scontrol::new(config.resolve_scontrol(flag)))
        }
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    ui::configure_colors(matches.get_flag("no-color"));

    let filter = filter_from_matches(matches)?;
    let config = Config::load()?;
    let source = source_from_matches(matches, &config);

    log::debug!("Active filters: {:?}", filter);

    let report = NodeReport::collect(source.as_ref(), &filter)
        .with_context(|| format!("Failed to collect node status from {}", source.describe()))?;

    let color = ui::colors_enabled();
    for line in formatters::format_table(&report.nodes, color) {
        println!("{}", line);
    }

    if report.is_empty() && !filter.is_empty() {
        log::info!("No nodes matched the active filters");
    }

    if matches.get_flag("summary") {
        println!();
        for line in formatters::format_summary(&report.summary(), chrono::Local::now()) {
            println!("{}", line);
        }
    }

    // Exports run after the table is printed, so a bad path never hides the report
    if let Some(path) = matches.get_one::<String>("csv") {
        let path = config.resolve_export_path(path);
        export::write_csv(&path, &report.nodes)
            .with_context(|| format!("Failed to write CSV export to {:?}", path))?;
    }

    if let Some(path) = matches.get_one::<String>("json") {
        let path = config.resolve_export_path(path);
        export::write_json(&path, &report.nodes)
            .with_context(|| format!("Failed to write JSON export to {:?}", path))?;
    }

    Ok(())
}

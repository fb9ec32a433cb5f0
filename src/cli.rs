// Command line definition, shared by main and the completions generator

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("nodestat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-node CPU, GPU and memory utilization for a Slurm cluster")
        .long_about(
            "Per-node CPU, GPU and memory utilization for a Slurm cluster\n\n\
             Runs 'scontrol show node --oneliner' and prints one aligned row per node.\n\
             Filters combine: a node is shown only when it passes every filter given.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("cpu-only")
                .short('c')
                .long("cpu-only")
                .help("Only show nodes with allocated CPUs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("gpu-only")
                .short('g')
                .long("gpu-only")
                .help("Only show nodes with allocated GPUs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("idle-only")
                .short('i')
                .long("idle-only")
                .help("Only show nodes with no allocated CPUs or GPUs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("state")
                .short('s')
                .long("state")
                .value_name("PATTERN")
                .help("Only show nodes whose state matches PATTERN (case-insensitive regex)"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .value_name("PATH")
                .help("Also write the report as CSV"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .value_name("PATH")
                .help("Also write the report as JSON"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Read saved 'scontrol show node --oneliner' output ('-' for stdin)"),
        )
        .arg(
            Arg::new("scontrol")
                .long("scontrol")
                .value_name("PATH")
                .help("scontrol binary to run (overrides NODESTAT_SCONTROL and the config file)")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print cluster totals after the table")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("config")
                .about("Manage nodestat settings (use 'nodestat config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(
                            Command::new("scontrol")
                                .about("Set the scontrol binary to run")
                                .arg(
                                    Arg::new("path")
                                        .help("Path or name of the scontrol binary")
                                        .required(true)
                                        .index(1),
                                ),
                        )
                        .subcommand(
                            Command::new("export-dir")
                                .about("Set the directory relative export paths are written to")
                                .arg(
                                    Arg::new("path")
                                        .help("Export directory")
                                        .required(true)
                                        .index(1),
                                ),
                        ),
                )
                .subcommand(Command::new("get").about("Show the current configuration"))
                .subcommand(Command::new("reset").about("Restore the default configuration")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

use anyhow::Result;

use nodestat::cli::build_cli;
use nodestat::commands;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    nodestat::init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())
        }
        Some(("version", _)) => commands::version(),
        _ => commands::nodes(&matches),
    }
}

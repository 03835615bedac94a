mod cli;
mod commands;
mod logging;

use cli::{BranchParams, CasesParams, ConvertParams, StatsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", m)) => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into())
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into())
        }
        Some(("branch", m)) => {
            let params = BranchParams::from_matches(m);
            commands::branch::run(params.into())
        }
        Some(("cases", m)) => {
            let params = CasesParams::from_matches(m);
            commands::cases::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

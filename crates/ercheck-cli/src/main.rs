//! ercheck CLI — static ERC20 conformance checking for smart contracts.
//!
//! Usage: `ercheck <model.json> <contract-name>`. Exits 0 when the
//! analysis completes (regardless of the conformance verdict) and 2
//! when the model can't be loaded or the contract isn't in it.

use clap::Parser;

use ercheck_core::model::SourceModel;
use ercheck_core::ruleset::Ruleset;
use ercheck_engine::engine::ConformanceEngine;
use ercheck_output::OutputFormatter;

mod cli_args;

use cli_args::Cli;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let ruleset = match &cli.ruleset {
        Some(path) => match Ruleset::load(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("ercheck: {}", e);
                return 2;
            }
        },
        None => Ruleset::erc20(),
    };

    let model = match SourceModel::load(&cli.model) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("ercheck: {}", e);
            return 2;
        }
    };

    // Contract lookup is the fatal precondition: no report without it.
    let contract = match model.contract(&cli.contract) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ercheck: {}", e);
            return 2;
        }
    };

    let report = ConformanceEngine::new(&ruleset).analyze(contract);

    let formatter: Box<dyn OutputFormatter> = if cli.json {
        Box::new(ercheck_output::json::JsonFormatter)
    } else {
        Box::new(ercheck_output::human::HumanFormatter)
    };
    print!("{}", formatter.format_report(&report));

    0
}

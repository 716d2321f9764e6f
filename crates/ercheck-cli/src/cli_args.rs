use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ercheck",
    version,
    about = "Static ERC20 conformance checking for smart contracts"
)]
pub(crate) struct Cli {
    /// Path to the serialized semantic model (JSON) produced by the
    /// analysis engine
    pub model: PathBuf,

    /// Name of the contract to check
    pub contract: String,

    /// Output as structured JSON
    #[arg(long)]
    pub json: bool,

    /// Substitute ruleset file (JSON) instead of the built-in ERC20 table
    #[arg(long, value_name = "PATH")]
    pub ruleset: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;

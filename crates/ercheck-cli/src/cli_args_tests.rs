use clap::Parser;

use super::Cli;

#[test]
fn test_positional_args() {
    let cli = Cli::parse_from(["ercheck", "model.json", "Token"]);
    assert_eq!(cli.model.to_str(), Some("model.json"));
    assert_eq!(cli.contract, "Token");
    assert!(!cli.json);
    assert!(cli.ruleset.is_none());
}

#[test]
fn test_json_flag() {
    let cli = Cli::parse_from(["ercheck", "model.json", "Token", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_ruleset_override() {
    let cli = Cli::parse_from(["ercheck", "model.json", "Token", "--ruleset", "erc721.json"]);
    assert_eq!(cli.ruleset.unwrap().to_str(), Some("erc721.json"));
}

#[test]
fn test_missing_contract_name_is_an_error() {
    assert!(Cli::try_parse_from(["ercheck", "model.json"]).is_err());
}

#[test]
fn test_unknown_flag_is_an_error() {
    assert!(Cli::try_parse_from(["ercheck", "model.json", "Token", "--llm"]).is_err());
}

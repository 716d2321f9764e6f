use std::io::Write;

use super::*;

#[test]
fn test_erc20_table_contents() {
    let rules = Ruleset::erc20();
    assert_eq!(rules.standard, "ERC20");

    let function_names: Vec<&str> = rules.functions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(function_names, vec!["transfer", "approve", "transferFrom"]);

    let event_names: Vec<&str> = rules.events.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(event_names, vec!["Transfer", "Approval"]);

    let getter_names: Vec<&str> = rules.getters.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        getter_names,
        vec!["totalSupply", "balanceOf", "allowance", "name", "symbol", "decimals"]
    );

    assert_eq!(rules.event_by_function["transfer"].name, "Transfer");
    assert_eq!(rules.event_by_function["approve"].name, "Approval");
    assert_eq!(rules.event_by_function["transferFrom"].name, "Transfer");
    assert!(!rules.event_by_function.contains_key("balanceOf"));
}

#[test]
fn test_erc20_events_have_no_return_types() {
    let rules = Ruleset::erc20();
    for event in &rules.events {
        assert!(event.return_types.is_empty(), "{} has a return slot", event.name);
    }
}

#[test]
fn test_load_roundtrip() {
    let rules = Ruleset::erc20();
    let json = serde_json::to_string_pretty(&rules).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = Ruleset::load(file.path()).unwrap();
    assert_eq!(loaded.standard, rules.standard);
    assert_eq!(loaded.functions, rules.functions);
    assert_eq!(loaded.getters, rules.getters);
    assert_eq!(loaded.event_by_function, rules.event_by_function);
}

#[test]
fn test_load_renormalizes_types() {
    let json = r#"{
        "standard": "Custom",
        "functions": [
            {"name": "mint", "parameter_types": ["address", "uint"], "return_types": ["bool"]}
        ],
        "events": [],
        "getters": [],
        "event_by_function": {}
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = Ruleset::load(file.path()).unwrap();
    assert_eq!(
        loaded.functions[0].parameter_types,
        vec!["address".to_string(), "uint256".to_string()]
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = Ruleset::load(Path::new("/nonexistent/rules.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}

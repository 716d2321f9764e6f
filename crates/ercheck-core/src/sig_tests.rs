use super::*;
use crate::types::Visibility;

#[test]
fn test_normalize_elastic_aliases() {
    assert_eq!(normalize_type("uint"), "uint256");
    assert_eq!(normalize_type("int"), "int256");
    assert_eq!(normalize_type("byte"), "bytes1");
    assert_eq!(normalize_type("uint256"), "uint256");
    assert_eq!(normalize_type("address"), "address");
}

#[test]
fn test_normalize_strips_whitespace() {
    assert_eq!(normalize_type(" uint256 "), "uint256");
    assert_eq!(normalize_type("mapping (address => uint256)"), "mapping(address=>uint256)");
}

#[test]
fn test_signature_equality_over_canonical_forms() {
    let a = Signature::new("totalSupply", &[] as &[&str], &["uint"]);
    let b = Signature::new("totalSupply", &[] as &[&str], &["uint256"]);
    assert_eq!(a, b);
}

#[test]
fn test_signature_equality_is_order_and_case_sensitive() {
    let a = Signature::new("transfer", &["address", "uint256"], &["bool"]);
    let reordered = Signature::new("transfer", &["uint256", "address"], &["bool"]);
    let recased = Signature::new("Transfer", &["address", "uint256"], &["bool"]);
    assert_ne!(a, reordered);
    assert_ne!(a, recased);
}

#[test]
fn test_format_inline() {
    let sig = Signature::new("transfer", &["address", "uint256"], &["bool"]);
    assert_eq!(sig.format_inline(true), "transfer(address,uint256) -> (bool)");
    assert_eq!(sig.format_inline(false), "transfer(address,uint256)");

    let event = Signature::new("Transfer", &["address", "address", "uint256"], &[]);
    assert_eq!(event.format_inline(true), "Transfer(address,address,uint256)");
}

#[test]
fn test_function_shape_matches() {
    let f = Function {
        name: "transfer".to_string(),
        visibility: Visibility::External,
        parameter_types: vec!["address".to_string(), "uint".to_string()],
        return_types: vec!["bool".to_string()],
        internal_calls: vec![],
        emitted_events: vec![],
        modifiers: vec![],
    };
    let expected = Signature::new("transfer", &["address", "uint256"], &["bool"]);
    assert!(f.matches(&expected));
}

#[test]
fn test_state_variable_shape_is_name_plus_type() {
    let v = StateVariable {
        name: "totalSupply".to_string(),
        visibility: Visibility::Public,
        declared_type: "uint256".to_string(),
    };
    let getter = Signature::new("totalSupply", &[] as &[&str], &["uint256"]);
    assert!(v.matches(&getter));
    assert_eq!(v.parameter_types(), Vec::<String>::new());
}

#[test]
fn test_event_shape_has_no_return_slot() {
    let e = Event {
        name: "Transfer".to_string(),
        argument_types: vec![
            "address".to_string(),
            "address".to_string(),
            "uint256".to_string(),
        ],
    };
    let expected = Signature::new("Transfer", &["address", "address", "uint256"], &[]);
    assert!(e.matches(&expected));
}

#[test]
fn test_signature_deserialization_renormalizes() {
    let sig: Signature =
        serde_json::from_str(r#"{"name":"totalSupply","return_types":["uint"]}"#).unwrap();
    assert_eq!(sig.return_types, vec!["uint256".to_string()]);
    assert!(sig.parameter_types.is_empty());
}

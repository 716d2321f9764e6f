//! Getter resolution.
//!
//! A getter obligation is satisfied by either a public state variable
//! of matching name and type, or a visible function of matching
//! signature. A public field and an equivalently-typed accessor are
//! interchangeable; nothing else is (no subtype or implicit-conversion
//! reasoning, so a `uint256` field never satisfies a `uint128` getter).

use ercheck_core::sig::{Signature, SignatureShape};
use ercheck_core::types::{Function, StateVariable, Visibility};

use crate::matcher::find_match;
use crate::types::GetterResult;

/// Check each expected getter against the contract's state variables
/// and visible functions. Field matches require public visibility;
/// `visible_functions` is assumed pre-filtered.
pub fn verify_getters(
    state_variables: &[StateVariable],
    visible_functions: &[&Function],
    expected: &[Signature],
) -> Vec<GetterResult> {
    expected
        .iter()
        .map(|getter| GetterResult {
            getter: getter.clone(),
            satisfied: field_satisfies(state_variables, getter)
                || find_match(visible_functions, getter).is_some(),
        })
        .collect()
}

// The field branch requires public visibility specifically; state
// variables cannot be external, and internal/private ones generate no
// accessor.
fn field_satisfies(state_variables: &[StateVariable], getter: &Signature) -> bool {
    state_variables
        .iter()
        .any(|v| v.visibility == Visibility::Public && v.matches(getter))
}

#[cfg(test)]
#[path = "getters_tests.rs"]
mod tests;

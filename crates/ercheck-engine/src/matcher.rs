//! Exact signature matching.

use ercheck_core::sig::{Signature, SignatureShape};

use crate::types::MatchResult;

/// First candidate whose structural signature equals `expected`, in
/// input order. Candidates are not mutated and duplicates are tolerated
/// (first declaration wins).
pub fn find_match<'a, T: SignatureShape>(candidates: &[&'a T], expected: &Signature) -> Option<&'a T> {
    candidates.iter().find(|c| c.matches(expected)).copied()
}

/// Match every expected signature against the candidates. The result
/// sequence has the same length and order as `expected`.
///
/// Visibility filtering is the caller's responsibility: function
/// candidates are expected to be pre-filtered to visible ones, while
/// event candidates are passed whole (events have no externality in
/// this model).
pub fn verify_signatures<T: SignatureShape>(
    candidates: &[&T],
    expected: &[Signature],
) -> Vec<MatchResult> {
    expected
        .iter()
        .map(|sig| MatchResult {
            expected: sig.clone(),
            matched: find_match(candidates, sig).map(|m| m.member_name().to_string()),
        })
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

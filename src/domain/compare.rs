//! Structural comparison and hint generation.
//!
//! `compare` decides whether a candidate tree satisfies a target tree.
//! It is tolerant where learners deserve tolerance (text case and
//! surrounding whitespace, extra attributes) and strict where structure
//! matters (tag identity, child arity, child order). `hints` turns the
//! first layer of discrepancies into ordered human-readable strings; it is
//! a greedy single pass, not a minimal edit script.

use crate::domain::forest::Forest;
use crate::domain::node::Node;

/// Whether `candidate` structurally satisfies `target`.
///
/// Rules, applied recursively:
/// - tag types must be identical,
/// - child counts must be identical,
/// - when the target carries text, the candidate's text must equal it after
///   trimming surrounding whitespace and lowercasing; a target without text
///   leaves the candidate's text unconstrained,
/// - every target attribute must be present on the candidate with a
///   case-insensitive-equal value; extra candidate attributes are ignored,
/// - children are compared pairwise by position, no reordering.
pub fn compare(candidate: &Node, target: &Node) -> bool {
    if candidate.tag != target.tag {
        return false;
    }
    if candidate.children.len() != target.children.len() {
        return false;
    }

    if let Some(target_text) = &target.text {
        match &candidate.text {
            Some(text) if normalized(text) == normalized(target_text) => {}
            _ => return false,
        }
    }

    for (key, value) in &target.attributes {
        match candidate.attributes.get(key) {
            Some(actual) if actual.to_lowercase() == value.to_lowercase() => {}
            _ => return false,
        }
    }

    candidate
        .children
        .iter()
        .zip(&target.children)
        .all(|(child, expected)| compare(child, expected))
}

/// Top-level puzzle verdict: the forest must hold exactly one root, and it
/// must compare true against the target.
pub fn forest_matches(forest: &Forest, target: &Node) -> bool {
    match forest.roots() {
        [root] => compare(root, target),
        _ => false,
    }
}

/// Ordered discrepancy hints for `candidate` against `target`.
///
/// A missing candidate or a wrong root tag short-circuits with a single
/// hint, since nothing deeper is useful until the root shape is right.
/// Otherwise one aggregate hint covers any child-count mismatch, then each
/// index shared by both child lists may add a tag-mismatch or text hint.
/// The per-child text check is exact (no trimming or case folding): a hint
/// nudging toward the canonical text is cheap, failing the comparison over
/// it would not be. Hints never recurse into a mismatched child's subtree.
pub fn hints(candidate: Option<&Node>, target: &Node) -> Vec<String> {
    let mut hints = Vec::new();

    let Some(candidate) = candidate else {
        hints.push(format!("Start by adding a {} tag.", target.tag));
        return hints;
    };

    if candidate.tag != target.tag {
        hints.push(format!(
            "Root should be {}, not {}.",
            target.tag, candidate.tag
        ));
        return hints;
    }

    let have = candidate.children.len();
    let want = target.children.len();
    if have < want {
        let missing = want - have;
        hints.push(format!(
            "Need {} more child element{} inside {}.",
            missing,
            if missing == 1 { "" } else { "s" },
            candidate.tag
        ));
    } else if have > want {
        hints.push(format!(
            "Too many children inside {}. Remove {}.",
            candidate.tag,
            have - want
        ));
    }

    for (index, (child, expected)) in candidate.children.iter().zip(&target.children).enumerate() {
        if child.tag != expected.tag {
            hints.push(format!(
                "Child {} should be {}, not {}.",
                index + 1,
                expected.tag,
                child.tag
            ));
        } else if let Some(text) = &expected.text {
            if child.text.as_deref() != Some(text.as_str()) {
                hints.push(format!("Update text in {} to \"{}\".", expected.tag, text));
            }
        }
    }

    if hints.is_empty() {
        hints.push("Almost there! Check nesting and text content.".to_string());
    }

    hints
}

fn normalized(text: &str) -> String {
    text.trim().to_lowercase()
}

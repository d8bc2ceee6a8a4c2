use crate::selector::{AttrOp, Combinator, ComplexSelector, Compound, Selector, SelectorList};
use dom::{Document, class_tokens};
use core_types::NodeId;
use std::collections::HashSet;

/// Selector weight as `(id, class, type)` counts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    fn add(self, other: Specificity) -> Specificity {
        Specificity(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}

fn specificity_of_simple(selector: &Selector) -> Specificity {
    match selector {
        Selector::Universal => Specificity(0, 0, 0),
        Selector::Type(_) => Specificity(0, 0, 1),
        Selector::Id(_) => Specificity(1, 0, 0),
        Selector::Class(_)
        | Selector::Attribute { .. }
        | Selector::Root
        | Selector::FirstChild
        | Selector::LastChild => Specificity(0, 1, 0),
        // :not() takes the weight of its most specific argument
        Selector::Not(inner) => inner
            .0
            .iter()
            .map(ComplexSelector::specificity)
            .max()
            .unwrap_or_default(),
    }
}

impl ComplexSelector {
    pub fn specificity(&self) -> Specificity {
        self.parts
            .iter()
            .flat_map(|(_, Compound(simple))| simple.iter())
            .fold(Specificity::default(), |acc, s| {
                acc.add(specificity_of_simple(s))
            })
    }
}

/// Does the element `node` match any selector in `list`?
/// Non-element nodes never match.
pub fn matches(doc: &Document, node: NodeId, list: &SelectorList) -> bool {
    doc.is_element(node) && list.0.iter().any(|c| matches_complex(doc, node, c))
}

/// The highest specificity among the selectors in `list` matching `node`.
pub fn matching_specificity(
    doc: &Document,
    node: NodeId,
    list: &SelectorList,
) -> Option<Specificity> {
    if !doc.is_element(node) {
        return None;
    }
    list.0
        .iter()
        .filter(|c| matches_complex(doc, node, c))
        .map(ComplexSelector::specificity)
        .max()
}

fn matches_complex(doc: &Document, node: NodeId, complex: &ComplexSelector) -> bool {
    match complex.parts.len() {
        0 => false,
        // most candidates fail on their own compound; skip the matcher setup
        n if !matches_compound(doc, node, &complex.parts[n - 1].1) => false,
        n => ChainMatcher {
            doc,
            parts: &complex.parts,
            failed: HashSet::new(),
        }
        .matches_from(node, n - 1),
    }
}

// Right-to-left match of one complex selector. Descendant and sibling
// relations backtrack over every candidate; `(node, idx)` pairs that already
// failed are remembered, so each is tried at most once per match.
struct ChainMatcher<'a> {
    doc: &'a Document,
    parts: &'a [(Option<Combinator>, Compound)],
    failed: HashSet<(NodeId, usize)>,
}

impl ChainMatcher<'_> {
    // `parts[..=idx]` with `parts[idx]` anchored at `node`.
    fn matches_from(&mut self, node: NodeId, idx: usize) -> bool {
        if self.failed.contains(&(node, idx)) {
            return false;
        }
        let matched = self.try_match(node, idx);
        if !matched {
            self.failed.insert((node, idx));
        }
        matched
    }

    fn try_match(&mut self, node: NodeId, idx: usize) -> bool {
        let (doc, parts) = (self.doc, self.parts);
        let (combinator, compound) = &parts[idx];
        if !matches_compound(doc, node, compound) {
            return false;
        }
        if idx == 0 {
            return true;
        }
        match combinator.unwrap_or(Combinator::Descendant) {
            Combinator::Child => doc
                .parent(node)
                .is_some_and(|p| self.matches_from(p, idx - 1)),
            Combinator::Descendant => doc
                .ancestors(node)
                .skip(1)
                .any(|a| self.matches_from(a, idx - 1)),
            Combinator::NextSibling => doc
                .previous_element_sibling(node)
                .is_some_and(|s| self.matches_from(s, idx - 1)),
            Combinator::SubsequentSibling => {
                let mut cursor = doc.previous_element_sibling(node);
                while let Some(sibling) = cursor {
                    if self.matches_from(sibling, idx - 1) {
                        return true;
                    }
                    cursor = doc.previous_element_sibling(sibling);
                }
                false
            }
        }
    }
}

fn matches_compound(doc: &Document, node: NodeId, compound: &Compound) -> bool {
    let Some(name) = doc.tag_name(node) else {
        return false;
    };
    compound.0.iter().all(|selector| match selector {
        Selector::Universal => true,
        Selector::Type(t) => name.eq_ignore_ascii_case(t),
        Selector::Id(want) => doc.attribute(node, "id") == Some(want.as_str()),
        Selector::Class(want) => class_tokens(doc.attribute(node, "class")).contains(&want.as_str()),
        Selector::Attribute { name, value } => {
            let Some(actual) = doc.attribute(node, name) else {
                return false;
            };
            match value {
                None => true,
                Some((op, want)) => attr_matches(*op, actual, want),
            }
        }
        Selector::Root => doc.document_element() == Some(node),
        Selector::FirstChild => {
            doc.parent(node).is_some() && doc.previous_element_sibling(node).is_none()
        }
        Selector::LastChild => {
            doc.parent(node).is_some() && doc.next_element_sibling(node).is_none()
        }
        Selector::Not(inner) => !matches(doc, node, inner),
    })
}

fn attr_matches(op: AttrOp, actual: &str, want: &str) -> bool {
    match op {
        AttrOp::Equals => actual == want,
        AttrOp::Includes => actual.split_ascii_whitespace().any(|t| t == want),
        AttrOp::DashMatch => {
            actual == want
                || actual
                    .strip_prefix(want)
                    .is_some_and(|rest| rest.starts_with('-'))
        }
        // empty values never match the substring operators
        AttrOp::Prefix => !want.is_empty() && actual.starts_with(want),
        AttrOp::Suffix => !want.is_empty() && actual.ends_with(want),
        AttrOp::Substring => !want.is_empty() && actual.contains(want),
    }
}

/// Nearest inclusive ancestor of `node` that is an element matching `list`.
pub fn closest(doc: &Document, node: NodeId, list: &SelectorList) -> Option<NodeId> {
    if !doc.is_element(node) {
        return None;
    }
    doc.ancestors(node).find(|a| matches(doc, *a, list))
}

/// Descendants of `scope` matching `list`, in document order.
pub fn query_selector_all(doc: &Document, scope: NodeId, list: &SelectorList) -> Vec<NodeId> {
    doc.descendants(scope)
        .filter(|n| matches(doc, *n, list))
        .collect()
}

pub fn query_selector(doc: &Document, scope: NodeId, list: &SelectorList) -> Option<NodeId> {
    doc.descendants(scope).find(|n| matches(doc, *n, list))
}

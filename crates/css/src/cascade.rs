use crate::matching::{Specificity, matching_specificity};
use crate::syntax::{Declaration, Stylesheet, parse_declarations, serialize_declarations};
use core_types::NodeId;
use dom::{Document, DomError};

/// Sort key of one candidate declaration; the greatest key wins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
struct CascadeRank {
    important: bool,
    inline: bool,
    specificity: Specificity,
    order: u32,
}

// If the element has an inline style attribute, return its value
pub fn get_inline_style(doc: &Document, node: NodeId) -> Option<&str> {
    doc.attribute(node, "style")
}

/// Cascaded value of `property` on `node`, considering the inline style and
/// every rule of `sheets` (later sheets and rules win ties).
pub fn property_value(
    doc: &Document,
    node: NodeId,
    sheets: &[Stylesheet],
    property: &str,
) -> Option<String> {
    let mut best: Option<(CascadeRank, String)> = None;
    let mut consider = |rank: CascadeRank, decl: &Declaration| {
        if decl.name == property && best.as_ref().is_none_or(|(cur, _)| rank >= *cur) {
            best = Some((rank, decl.value.clone()));
        }
    };

    let mut order = 0u32;
    for sheet in sheets {
        for rule in &sheet.rules {
            order += 1;
            let Some(specificity) = matching_specificity(doc, node, &rule.selectors) else {
                continue;
            };
            for decl in &rule.declarations {
                consider(
                    CascadeRank {
                        important: decl.important,
                        inline: false,
                        specificity,
                        order,
                    },
                    decl,
                );
            }
        }
    }

    if let Some(inline) = get_inline_style(doc, node) {
        for decl in parse_declarations(inline) {
            consider(
                CascadeRank {
                    important: decl.important,
                    inline: true,
                    specificity: Specificity::default(),
                    order: u32::MAX,
                },
                &decl,
            );
        }
    }

    best.map(|(_, value)| value)
}

/// Set one property in the element's inline style, replacing any previous
/// value. An empty `value` removes the property instead.
pub fn set_inline_property(
    doc: &mut Document,
    node: NodeId,
    property: &str,
    value: &str,
) -> Result<(), DomError> {
    let value = value.trim();
    if value.is_empty() {
        return remove_inline_property(doc, node, property).map(|_| ());
    }
    if !doc.is_element(node) {
        return Err(DomError::NotAnElement(node));
    }
    let mut decls = parse_declarations(get_inline_style(doc, node).unwrap_or(""));
    decls.retain(|d| d.name != property);
    decls.push(Declaration {
        name: property.to_string(),
        value: value.to_string(),
        important: false,
    });
    let text = serialize_declarations(&decls);
    doc.set_attribute(node, "style", Some(&text))
}

/// Remove a property from the element's inline style. Returns whether it was set.
pub fn remove_inline_property(
    doc: &mut Document,
    node: NodeId,
    property: &str,
) -> Result<bool, DomError> {
    if !doc.is_element(node) {
        return Err(DomError::NotAnElement(node));
    }
    let Some(inline) = get_inline_style(doc, node) else {
        return Ok(false);
    };
    let mut decls = parse_declarations(inline);
    let before = decls.len();
    decls.retain(|d| d.name != property);
    if decls.len() == before {
        return Ok(false);
    }
    let text = serialize_declarations(&decls);
    doc.set_attribute(node, "style", Some(&text))?;
    Ok(true)
}

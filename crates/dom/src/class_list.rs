use crate::{Document, DomError};
use core_types::NodeId;

/// Split a `class` attribute value into its tokens, dropping duplicates.
pub fn class_tokens(value: Option<&str>) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for token in value.unwrap_or("").split_ascii_whitespace() {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

fn validate_token(token: &str) -> Result<(), DomError> {
    if token.is_empty() || token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(DomError::InvalidToken(token.to_string()));
    }
    Ok(())
}

impl Document {
    pub fn has_class(&self, id: NodeId, name: &str) -> bool {
        class_tokens(self.attribute(id, "class")).contains(&name)
    }

    pub fn add_classes(&mut self, id: NodeId, names: &[&str]) -> Result<(), DomError> {
        for name in names {
            validate_token(name)?;
        }
        self.update_classes(id, |classes| {
            for name in names {
                if !classes.iter().any(|c| c == name) {
                    classes.push((*name).to_string());
                }
            }
        })
    }

    pub fn remove_classes(&mut self, id: NodeId, names: &[&str]) -> Result<(), DomError> {
        for name in names {
            validate_token(name)?;
        }
        self.update_classes(id, |classes| {
            classes.retain(|c| !names.contains(&c.as_str()));
        })
    }

    /// Toggle one class; `force` pins the outcome. Returns whether the class
    /// is present afterwards.
    pub fn toggle_class(
        &mut self,
        id: NodeId,
        name: &str,
        force: Option<bool>,
    ) -> Result<bool, DomError> {
        validate_token(name)?;
        let present = self.has_class(id, name);
        let want = force.unwrap_or(!present);
        if want != present {
            if want {
                self.add_classes(id, &[name])?;
            } else {
                self.remove_classes(id, &[name])?;
            }
        } else if !self.is_element(id) {
            return Err(DomError::NotAnElement(id));
        }
        Ok(want)
    }

    fn update_classes(
        &mut self,
        id: NodeId,
        edit: impl FnOnce(&mut Vec<String>),
    ) -> Result<(), DomError> {
        let mut classes: Vec<String> = class_tokens(self.attribute(id, "class"))
            .into_iter()
            .map(str::to_string)
            .collect();
        edit(&mut classes);
        let joined = classes.join(" ");
        self.set_attribute(id, "class", Some(&joined))
    }
}

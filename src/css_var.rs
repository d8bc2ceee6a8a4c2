use dom::DomError;
use platform::Host;

fn custom_property(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

/// Computed value of the custom property `--name` on the document element,
/// trimmed. Empty when it is not set anywhere.
pub fn css_var(host: &Host, name: &str) -> String {
    let doc = host.document();
    let Some(root) = doc.document_element() else {
        return String::new();
    };
    css::property_value(doc, root, host.stylesheets(), &custom_property(name))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Set `--name` in the document element's inline style. An empty value
/// removes it.
pub fn set_css_var(host: &mut Host, name: &str, value: &str) -> Result<(), DomError> {
    let root = host
        .document()
        .document_element()
        .ok_or(DomError::MissingDocumentElement)?;
    css::set_inline_property(host.document_mut(), root, &custom_property(name), value)
}

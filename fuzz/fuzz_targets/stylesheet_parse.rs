#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let sheet = css::parse_stylesheet(input);
    let sheets = [sheet];

    let mut doc = dom::Document::with_skeleton();
    let Some(root) = doc.document_element() else {
        return;
    };
    for decl in css::parse_declarations(input) {
        let _ = css::property_value(&doc, root, &sheets, &decl.name);
        let _ = css::set_inline_property(&mut doc, root, &decl.name, &decl.value);
    }
});

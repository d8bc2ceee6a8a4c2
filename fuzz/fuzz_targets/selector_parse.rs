#![no_main]

use libfuzzer_sys::fuzz_target;

// Parse arbitrary selectors and run the ones that parse against a small tree.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(list) = css::parse_selector(input) else {
        return;
    };

    let mut doc = dom::Document::with_skeleton();
    let Some(body) = doc.body() else {
        return;
    };
    let mut parent = body;
    for (i, tag) in ["div", "ul", "li", "a"].into_iter().enumerate() {
        let node = doc.create_element(tag);
        let _ = doc.set_attribute(node, "class", Some(&format!("c{i} x")));
        let _ = doc.set_attribute(node, "id", Some(tag));
        let _ = doc.append_child(parent, node);
        let text = doc.create_text("t");
        let _ = doc.append_child(parent, text);
        parent = node;
    }

    let all = css::query_selector_all(&doc, dom::NodeId::DOCUMENT, &list);
    assert_eq!(
        css::query_selector(&doc, dom::NodeId::DOCUMENT, &list),
        all.first().copied()
    );
    for node in all {
        assert!(css::matches(&doc, node, &list));
        assert_eq!(css::closest(&doc, node, &list), Some(node));
    }
});

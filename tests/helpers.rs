use dom_test_support::{CallLog, assert_outline, body, loaded_test_host, test_host};
use domkit::{
    Child, DomError, EventInit, Prop, ReadyState, add_class, css_var, el, has_class, once, qs,
    qsa, qsa_within, ready, remove, remove_class, set_css_var, toggle_class,
};

#[test]
fn el_builds_a_detached_element_with_text() {
    let (mut host, _clock) = test_host();
    let div = el(&mut host, "div", [("class", "x")], ["hello"]).unwrap();

    assert!(has_class(&host, div, "x"));
    assert_eq!(host.document().parent(div), None);
    assert_outline(host.document(), div, &[r#"<div class="x">"#, r#"  "hello""#]);
}

#[test]
fn el_composes_into_a_tree() {
    let (mut host, _clock) = test_host();
    let clicks = CallLog::new();
    let log = clicks.clone();

    let link = el(
        &mut host,
        "a",
        [
            ("href", Prop::from("/docs")),
            ("onclick", Prop::on(move |_, event| log.push(event.target()))),
        ],
        ["Docs"],
    )
    .unwrap();
    let nav = el(
        &mut host,
        "nav",
        [("className", "top"), ("aria-label", "main")],
        [Child::from(link), Child::Skip, " | ".into()],
    )
    .unwrap();
    let body = body(&host);
    host.document_mut().append_child(body, nav).unwrap();

    assert_outline(
        host.document(),
        nav,
        &[
            r#"<nav class="top" aria-label="main">"#,
            r#"  <a href="/docs">"#,
            r#"    "Docs""#,
            r#"  "|""#,
        ],
    );
    assert_eq!(qs(&host, "nav.top > a[href='/docs']").unwrap(), Some(link));

    host.dispatch_event(link, "click", EventInit::BUBBLES);
    assert_eq!(clicks.calls(), vec![link]);

    assert!(remove(&mut host, nav));
    assert!(!remove(&mut host, nav));
    assert!(qsa(&host, "a").unwrap().is_empty());
}

#[test]
fn moving_an_attached_child() {
    let (mut host, _clock) = test_host();
    let body = body(&host);
    let item = el(&mut host, "li", [] as [(&str, &str); 0], ["x"]).unwrap();
    host.document_mut().append_child(body, item).unwrap();

    let list = el(&mut host, "ul", [] as [(&str, &str); 0], [item]).unwrap();
    assert_eq!(host.document().parent(item), Some(list));
    assert!(qsa_within(&host, body, "li").unwrap().is_empty());
}

#[test]
fn class_helpers_round_trip() {
    let (mut host, _clock) = test_host();
    let div = el(&mut host, "div", [("class", "card")], [] as [Child; 0]).unwrap();

    add_class(&mut host, div, &["open", "wide"]).unwrap();
    remove_class(&mut host, div, &["card", "wide"]).unwrap();
    assert_eq!(host.document().attribute(div, "class"), Some("open"));

    assert!(!toggle_class(&mut host, div, "open", None).unwrap());
    assert!(toggle_class(&mut host, div, "open", Some(true)).unwrap());
    assert!(toggle_class(&mut host, div, "open", Some(true)).unwrap());
    assert!(has_class(&host, div, "open"));
    assert_eq!(
        add_class(&mut host, div, &[""]),
        Err(DomError::InvalidToken(String::new()))
    );
}

#[test]
fn ready_defers_until_content_loaded_then_runs_once() {
    let (mut host, _clock) = test_host();
    let seen = CallLog::new();
    let first = seen.clone();
    let second = seen.clone();
    ready(&mut host, move |host| first.push(("first", host.ready_state())));
    ready(&mut host, move |_| second.push(("second", ReadyState::Loading)));
    assert!(seen.is_empty());

    host.set_ready_state(ReadyState::Complete);
    host.dispatch_event(domkit::NodeId::DOCUMENT, "DOMContentLoaded", EventInit::BUBBLES);
    assert_eq!(
        seen.take(),
        vec![
            ("first", ReadyState::Interactive),
            ("second", ReadyState::Loading)
        ]
    );

    let late = seen.clone();
    ready(&mut host, move |host| late.push(("late", host.ready_state())));
    assert_eq!(seen.calls(), vec![("late", ReadyState::Complete)]);
}

#[test]
fn once_helper_with_loaded_host() {
    let (mut host, _clock) = loaded_test_host();
    let body = body(&host);
    let seen = CallLog::new();
    let log = seen.clone();
    once(&mut host, body, "focus", move |_, event| log.push(event.event_type().to_string()));
    host.dispatch_event(body, "focus", EventInit::default());
    host.dispatch_event(body, "focus", EventInit::default());
    assert_eq!(seen.calls(), vec!["focus".to_string()]);
}

#[test]
fn css_var_round_trip() {
    let (mut host, _clock) = test_host();
    set_css_var(&mut host, "accent", "#f00").unwrap();
    assert_eq!(css_var(&host, "accent"), "#f00");
}

#[test]
fn css_var_values_with_semicolons_round_trip() {
    let (mut host, _clock) = test_host();
    let bg = r#"url("data:image/png;base64,AAAA")"#;
    set_css_var(&mut host, "bg", bg).unwrap();
    set_css_var(&mut host, "quote", r#""a;b""#).unwrap();
    assert_eq!(css_var(&host, "bg"), bg);
    assert_eq!(css_var(&host, "quote"), r#""a;b""#);

    // rewriting one property keeps the other intact
    set_css_var(&mut host, "quote", "none").unwrap();
    assert_eq!(css_var(&host, "bg"), bg);
}

#[test]
fn css_var_reads_stylesheets_and_inline_overrides() {
    let (mut host, _clock) = test_host();
    host.add_stylesheet(
        ":root { --gap: 4px; --font: serif } html { --gap: 8px } :root.dark { --bg:  #000  }",
    );
    // `:root` is more specific than `html`
    assert_eq!(css_var(&host, "gap"), "4px");
    assert_eq!(css_var(&host, "bg"), "");

    let root = host.document().document_element().unwrap();
    add_class(&mut host, root, &["dark"]).unwrap();
    assert_eq!(css_var(&host, "bg"), "#000");

    set_css_var(&mut host, "--gap", "2px").unwrap();
    assert_eq!(css_var(&host, "gap"), "2px");
    assert_eq!(css_var(&host, "font"), "serif");

    set_css_var(&mut host, "gap", "").unwrap();
    assert_eq!(css_var(&host, "gap"), "4px");
    assert_eq!(css_var(&host, "missing"), "");
}

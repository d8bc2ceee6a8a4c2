use platform::{EventInit, EventPhase, Host, ListenerOptions, ManualClock, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Tree {
    host: Host,
    body: NodeId,
    list: NodeId,
    item: NodeId,
}

// body > ul > li
fn tree() -> Tree {
    let mut host = Host::with_clock(ManualClock::default());
    let doc = host.document_mut();
    let body = doc.body().unwrap();
    let list = doc.create_element("ul");
    let item = doc.create_element("li");
    doc.append_child(body, list).unwrap();
    doc.append_child(list, item).unwrap();
    Tree {
        host,
        body,
        list,
        item,
    }
}

fn record(host: &mut Host, log: &Log, node: NodeId, name: &'static str, capture: bool) {
    let log = log.clone();
    host.add_event_listener(
        node,
        "click",
        ListenerOptions {
            capture,
            once: false,
        },
        move |_, event| {
            let phase = match event.phase() {
                EventPhase::Capturing => "capture",
                EventPhase::AtTarget => "target",
                EventPhase::Bubbling => "bubble",
                EventPhase::None => "none",
            };
            log.borrow_mut().push(format!("{name}:{phase}"));
        },
    );
}

#[test]
fn capture_target_bubble_order() {
    let Tree {
        mut host,
        body,
        list,
        item,
    } = tree();
    let log = Log::default();
    record(&mut host, &log, item, "li-bubble", false);
    record(&mut host, &log, item, "li-capture", true);
    record(&mut host, &log, body, "body-bubble", false);
    record(&mut host, &log, list, "ul-capture", true);
    record(&mut host, &log, NodeId::DOCUMENT, "doc-capture", true);
    record(&mut host, &log, list, "ul-bubble", false);

    let event = host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert_eq!(
        *log.borrow(),
        vec![
            "doc-capture:capture",
            "ul-capture:capture",
            "li-capture:target",
            "li-bubble:target",
            "ul-bubble:bubble",
            "body-bubble:bubble",
        ]
    );
    assert_eq!(event.current_target(), None);
    assert_eq!(event.phase(), EventPhase::None);
}

#[test]
fn non_bubbling_event_skips_bubble_phase() {
    let Tree {
        mut host,
        list,
        item,
        ..
    } = tree();
    let log = Log::default();
    record(&mut host, &log, list, "ul-capture", true);
    record(&mut host, &log, list, "ul-bubble", false);
    record(&mut host, &log, item, "li", false);

    host.dispatch_event(item, "click", EventInit::default());
    assert_eq!(*log.borrow(), vec!["ul-capture:capture", "li:target"]);
}

#[test]
fn stop_propagation_finishes_current_node_only() {
    let Tree {
        mut host,
        list,
        item,
        ..
    } = tree();
    let log = Log::default();
    host.add_event_listener(item, "click", ListenerOptions::default(), |_, event| {
        event.stop_propagation()
    });
    record(&mut host, &log, item, "li-second", false);
    record(&mut host, &log, list, "ul", false);

    let event = host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert!(event.propagation_stopped());
    assert_eq!(*log.borrow(), vec!["li-second:target"]);
}

#[test]
fn stop_immediate_propagation_skips_remaining_listeners() {
    let Tree {
        mut host,
        list,
        item,
        ..
    } = tree();
    let log = Log::default();
    host.add_event_listener(item, "click", ListenerOptions::default(), |_, event| {
        event.stop_immediate_propagation()
    });
    record(&mut host, &log, item, "li-second", false);
    record(&mut host, &log, list, "ul", false);

    host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert!(log.borrow().is_empty());
}

#[test]
fn once_listener_runs_a_single_time() {
    let Tree { mut host, item, .. } = tree();
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    host.add_event_listener(
        item,
        "click",
        ListenerOptions {
            capture: false,
            once: true,
        },
        move |host, event| {
            *h.borrow_mut() += 1;
            // already gone while running
            assert_eq!(host.listener_count(event.target(), "click"), 0);
        },
    );

    host.dispatch_event(item, "click", EventInit::BUBBLES);
    host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn listeners_edited_during_dispatch() {
    let Tree { mut host, item, .. } = tree();
    let log = Log::default();
    let victim = Rc::new(RefCell::new(None));

    let l = log.clone();
    let v = victim.clone();
    host.add_event_listener(item, "click", ListenerOptions::default(), move |host, _| {
        l.borrow_mut().push("first".to_string());
        if let Some(id) = v.borrow_mut().take() {
            host.remove_event_listener(item, "click", id);
        }
        let l = l.clone();
        host.add_event_listener(item, "click", ListenerOptions::default(), move |_, _| {
            l.borrow_mut().push("added".to_string())
        });
    });
    let l = log.clone();
    let id = host.add_event_listener(item, "click", ListenerOptions::default(), move |_, _| {
        l.borrow_mut().push("removed".to_string())
    });
    *victim.borrow_mut() = Some(id);

    host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert_eq!(*log.borrow(), vec!["first"]);

    log.borrow_mut().clear();
    host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert_eq!(*log.borrow(), vec!["first", "added"]);
}

#[test]
fn prevent_default_is_reported_to_the_dispatcher() {
    let Tree {
        mut host,
        body,
        item,
        ..
    } = tree();
    host.add_event_listener(body, "submit", ListenerOptions::default(), |_, event| {
        event.prevent_default()
    });
    assert!(host.dispatch_event(item, "submit", EventInit::BUBBLES).default_prevented());
    assert!(
        !host
            .dispatch_event(
                item,
                "submit",
                EventInit {
                    bubbles: true,
                    cancelable: false
                }
            )
            .default_prevented()
    );
}

#[test]
fn detached_subtree_still_dispatches_locally() {
    let Tree {
        mut host,
        body,
        list,
        item,
    } = tree();
    let log = Log::default();
    record(&mut host, &log, item, "li", false);
    record(&mut host, &log, list, "ul", false);
    record(&mut host, &log, body, "body", false);

    host.document_mut().remove(list);
    host.dispatch_event(item, "click", EventInit::BUBBLES);
    assert_eq!(*log.borrow(), vec!["li:target", "ul:bubble"]);
}
